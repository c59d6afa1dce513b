//! pdfgenerator CLI - writes the stock three page document

use std::path::PathBuf;

use clap::Parser;
use pdfgenerator::{pagesize, FontSource, GeneratorConfig, PDFError, Pt, StandardFont};

#[derive(Parser)]
#[command(name = "pdfgenerator")]
#[command(version)]
#[command(about = "Generate a PDF with a text page, an image page, and a mixed page", long_about = None)]
struct Cli {
    /// Output PDF file [default: pdfFiles/pdfgenerator.pdf]
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Image drawn on the image and mixed pages [default: images/channel.png]
    #[arg(short, long, value_name = "FILE")]
    image: Option<PathBuf>,

    /// TrueType / OpenType font file to embed instead of a standard font
    #[arg(long, value_name = "FILE", conflicts_with = "standard_font")]
    font: Option<PathBuf>,

    /// Standard font to use (Times-Roman or Courier)
    #[arg(long, value_name = "NAME")]
    standard_font: Option<String>,

    /// Page size (letter, legal, a4)
    #[arg(long, value_name = "SIZE")]
    page_size: Option<String>,

    /// Page margin in points
    #[arg(long)]
    margin: Option<f32>,

    /// Body text size in points
    #[arg(long)]
    font_size: Option<f32>,

    /// Title size in points
    #[arg(long)]
    title_size: Option<f32>,

    /// Scale applied to image pixel sizes
    #[arg(long)]
    image_scale: Option<f32>,

    /// Title of the first page and the document
    #[arg(long)]
    title: Option<String>,

    /// Extra file to append as its own page; text or image, detected from its contents
    #[arg(long = "append", value_name = "FILE")]
    append: Vec<PathBuf>,
}

impl Cli {
    fn into_config(self) -> Result<GeneratorConfig, PDFError> {
        let mut config = GeneratorConfig::default();

        if let Some(output) = self.output {
            config.output = output;
        }
        if let Some(image) = self.image {
            config.image = image;
        }
        if let Some(font) = self.font {
            config.font = FontSource::File(font);
        }
        if let Some(name) = self.standard_font {
            let font = StandardFont::from_name(&name).ok_or_else(|| {
                PDFError::InvalidConfig(format!("unknown standard font '{name}'"))
            })?;
            config.font = FontSource::Standard(font);
        }
        if let Some(name) = self.page_size {
            config.page_size = pagesize::by_name(&name).ok_or_else(|| {
                PDFError::InvalidConfig(format!("unknown page size '{name}'"))
            })?;
        }
        if let Some(margin) = self.margin {
            config.margin = Pt(margin);
        }
        if let Some(size) = self.font_size {
            config.font_size = Pt(size);
        }
        if let Some(size) = self.title_size {
            config.title_size = Pt(size);
        }
        if let Some(scale) = self.image_scale {
            config.image_scale = scale;
        }
        if let Some(title) = self.title {
            config.title = title;
        }
        config.extra_pages = self.append;

        Ok(config)
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = cli.into_config()?;
    let output = config.output.clone();
    pdfgenerator::create_pdf(config)?;
    println!("PDF written to {}", output.display());
    Ok(())
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn no_arguments_gives_the_stock_config() {
        let cli = Cli::try_parse_from(["pdfgenerator"]).unwrap();
        assert_eq!(cli.into_config().unwrap(), GeneratorConfig::default());
    }

    #[test]
    fn arguments_override_defaults() {
        let cli = Cli::try_parse_from([
            "pdfgenerator",
            "-o",
            "out.pdf",
            "--standard-font",
            "Courier",
            "--page-size",
            "a4",
            "--margin",
            "36",
            "--append",
            "notes.txt",
        ])
        .unwrap();
        let config = cli.into_config().unwrap();
        assert_eq!(config.output, PathBuf::from("out.pdf"));
        assert_eq!(config.font, FontSource::Standard(StandardFont::Courier));
        assert_eq!(config.page_size, pagesize::A4);
        assert_eq!(config.margin, Pt(36.0));
        assert_eq!(config.extra_pages, vec![PathBuf::from("notes.txt")]);
    }

    #[test]
    fn unknown_names_are_config_errors() {
        let cli = Cli::try_parse_from(["pdfgenerator", "--page-size", "napkin"]).unwrap();
        assert!(matches!(cli.into_config(), Err(PDFError::InvalidConfig(_))));
    }

    #[test]
    fn font_file_and_standard_font_conflict() {
        let parsed =
            Cli::try_parse_from(["pdfgenerator", "--font", "a.ttf", "--standard-font", "Courier"]);
        assert!(parsed.is_err());
    }
}
