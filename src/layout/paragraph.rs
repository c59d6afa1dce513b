use super::Margins;
use crate::font::FontMetrics;
use crate::pagesize::PageSize;
use crate::units::Pt;

/// Extra space added below the font size to get the distance between baselines
pub const LINE_SPACING: Pt = Pt(2.0);

/// Distance between the baselines of two consecutive paragraph lines
pub fn line_height(font_size: Pt) -> Pt {
    font_size + LINE_SPACING
}

/// One laid-out line of text and the left end of its baseline
#[derive(Clone, PartialEq, Debug)]
pub struct LineLayout {
    pub text: String,
    pub coords: (Pt, Pt),
}

/// Breaks `text` into left-aligned lines that fit between the page's left and right
/// margins, using a greedy word wrap. Words are separated by single spaces only; runs
/// of spaces produce empty words which are kept as-is.
///
/// Each line keeps the trailing space that follows its last word. The first line sits
/// at `page_height - margin` and every following line is [line_height] lower. Nothing
/// stops lines running off the bottom of the page.
///
/// A word that is wider than the available width on its own is put on a line by
/// itself without being split. The very first word is never moved off the first line,
/// and a paragraph made of a single word is always a single line.
pub fn layout_paragraph<M: FontMetrics + ?Sized>(
    text: &str,
    metrics: &M,
    font_size: Pt,
    page_size: PageSize,
    margin: Pt,
) -> Vec<LineLayout> {
    let (page_width, page_height) = page_size;
    let max_width = Margins::all(margin).inner_width(page_width);
    let line_height = line_height(font_size);

    let mut lines: Vec<LineLayout> = Vec::new();
    let mut line = String::new();
    let mut y = page_height - margin;

    for (n, word) in text.split(' ').enumerate() {
        let test_line = format!("{line}{word} ");
        let test_width = metrics.width_of_text(&test_line, font_size);
        if test_width > max_width && n > 0 {
            let finished = std::mem::replace(&mut line, format!("{word} "));
            lines.push(LineLayout {
                text: finished,
                coords: (margin, y),
            });
            y -= line_height;
        } else {
            line = test_line;
        }
    }

    // whatever is left is always drawn, even if it's just a space
    lines.push(LineLayout {
        text: line,
        coords: (margin, y),
    });

    log::debug!(
        "laid out {} words into {} lines (max width {max_width})",
        text.split(' ').count(),
        lines.len()
    );
    lines
}

/// Places a single line of text horizontally centred on the page, with its baseline
/// `top_offset` below the top edge
pub fn layout_centred_line<M: FontMetrics + ?Sized>(
    text: &str,
    metrics: &M,
    font_size: Pt,
    page_size: PageSize,
    top_offset: Pt,
) -> LineLayout {
    let (page_width, page_height) = page_size;
    let width = metrics.width_of_text(text, font_size);
    LineLayout {
        text: text.to_string(),
        coords: ((page_width - width) / 2.0, page_height - top_offset),
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::font::StandardFont;
    use crate::pagesize::LETTER;

    /// Every character is 10 units wide at size 12, scaling linearly with size
    struct TenAtTwelve;

    impl FontMetrics for TenAtTwelve {
        fn width_of_text(&self, text: &str, size: Pt) -> Pt {
            Pt(text.chars().count() as f32 * 10.0 * size.0 / 12.0)
        }
    }

    const ALPHABET: &str = "aa bb cc dd ee ff gg hh ii jj kk ll mm";
    const NARROW: PageSize = (Pt(200.0), Pt(792.0));

    fn texts(lines: &[LineLayout]) -> Vec<&str> {
        lines.iter().map(|l| l.text.as_str()).collect()
    }

    #[test]
    fn short_text_is_one_line() {
        let lines = layout_paragraph(ALPHABET, &TenAtTwelve, Pt(12.0), LETTER, Pt(50.0));
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].text, "aa bb cc dd ee ff gg hh ii jj kk ll mm ");
        assert_eq!(lines[0].text.trim_end(), ALPHABET);
        assert_eq!(lines[0].coords, (Pt(50.0), Pt(742.0)));
    }

    #[test]
    fn wraps_greedily() {
        // 100pt available, each word plus its space is 30pt, so three words per line
        let lines = layout_paragraph(ALPHABET, &TenAtTwelve, Pt(12.0), NARROW, Pt(50.0));
        assert_eq!(
            texts(&lines),
            vec!["aa bb cc ", "dd ee ff ", "gg hh ii ", "jj kk ll ", "mm "]
        );
        let ys: Vec<Pt> = lines.iter().map(|l| l.coords.1).collect();
        assert_eq!(
            ys,
            vec![Pt(742.0), Pt(728.0), Pt(714.0), Pt(700.0), Pt(686.0)]
        );
        assert!(lines.iter().all(|l| l.coords.0 == Pt(50.0)));
    }

    #[test]
    fn a_line_can_fill_the_width_exactly() {
        // "aaaa bbbb " is exactly 100pt wide, which still fits
        let lines = layout_paragraph("aaaa bbbb c", &TenAtTwelve, Pt(12.0), NARROW, Pt(50.0));
        assert_eq!(texts(&lines), vec!["aaaa bbbb ", "c "]);
    }

    #[test]
    fn single_word_is_never_split() {
        let lines = layout_paragraph(
            "supercalifragilistic",
            &TenAtTwelve,
            Pt(12.0),
            NARROW,
            Pt(50.0),
        );
        assert_eq!(texts(&lines), vec!["supercalifragilistic "]);
        assert_eq!(lines[0].coords.1, Pt(742.0));
    }

    #[test]
    fn wide_first_word_gets_its_own_line() {
        let lines = layout_paragraph(
            "aaaaaaaaaaaaaaa b c",
            &TenAtTwelve,
            Pt(12.0),
            NARROW,
            Pt(50.0),
        );
        assert_eq!(texts(&lines), vec!["aaaaaaaaaaaaaaa ", "b c "]);
        // no empty line is emitted before the wide word
        assert_eq!(lines[0].coords.1, Pt(742.0));
    }

    #[test]
    fn wide_middle_word_sits_alone() {
        let lines = layout_paragraph(
            "a bbbbbbbbbbbbbbb c",
            &TenAtTwelve,
            Pt(12.0),
            NARROW,
            Pt(50.0),
        );
        assert_eq!(texts(&lines), vec!["a ", "bbbbbbbbbbbbbbb ", "c "]);
    }

    #[test]
    fn empty_text_still_draws_a_line() {
        let lines = layout_paragraph("", &TenAtTwelve, Pt(12.0), LETTER, Pt(50.0));
        assert_eq!(texts(&lines), vec![" "]);
    }

    #[test]
    fn repeated_spaces_are_kept() {
        let lines = layout_paragraph("a  b", &TenAtTwelve, Pt(12.0), LETTER, Pt(50.0));
        assert_eq!(texts(&lines), vec!["a  b "]);
    }

    #[test]
    fn line_height_follows_font_size() {
        let lines = layout_paragraph(ALPHABET, &TenAtTwelve, Pt(6.0), (Pt(100.0), Pt(500.0)), Pt(20.0));
        // 60pt available, each word plus its space is 15pt at size 6
        assert_eq!(lines.len(), 4);
        for pair in lines.windows(2) {
            assert_eq!(pair[0].coords.1 - pair[1].coords.1, Pt(8.0));
        }
        assert_eq!(lines[0].coords, (Pt(20.0), Pt(480.0)));
    }

    #[test]
    fn lines_fit_and_words_survive() {
        let texts = [
            "the quick brown fox jumps over the lazy dog while an extraordinarily \
             incomprehensible word tries to break the layout of this little paragraph",
            "doubled  spaces and   runs of them  make empty words, as do trailing ones  ",
        ];
        for text in texts {
            for width in [120.0, 180.0, 250.0, 400.0, 612.0] {
                let page = (Pt(width), Pt(792.0));
                let margin = Pt(10.0);
                let max_width = Pt(width) - margin * 2.0;
                let lines = layout_paragraph(text, &TenAtTwelve, Pt(12.0), page, margin);

                // each line is its words joined by single spaces, plus one trailing space
                let line_words = |line: &LineLayout| -> Vec<String> {
                    let joined = line.text.strip_suffix(' ').unwrap_or_else(|| {
                        panic!("line {:?} has no trailing space", line.text)
                    });
                    joined.split(' ').map(String::from).collect()
                };
                let words: Vec<String> = lines.iter().flat_map(line_words).collect();
                assert_eq!(words, text.split(' ').collect::<Vec<_>>());

                for line in &lines[..lines.len() - 1] {
                    let single_word = line_words(line).len() == 1;
                    assert!(
                        single_word
                            || TenAtTwelve.width_of_text(&line.text, Pt(12.0)) <= max_width,
                        "line {:?} overflows at page width {width}",
                        line.text
                    );
                }

                for pair in lines.windows(2) {
                    assert_eq!(pair[0].coords.1 - pair[1].coords.1, Pt(14.0));
                }
            }
        }
    }

    #[test]
    fn times_roman_paragraph_stays_within_letter_margins() {
        let text = "If you look in the dictionary under perfectionist you see Henry Selick \
                    correcting the definition of perfectionist in the dictionary. I mean, he is \
                    so meticulous. DON DONNNNNNNNNNNN ";
        let times = StandardFont::TimesRoman;
        let lines = layout_paragraph(text, &times, Pt(12.0), LETTER, Pt(50.0));
        assert!(lines.len() >= 2);
        for line in &lines {
            assert!(times.width_of_text(&line.text, Pt(12.0)) <= Pt(512.0));
        }
        // the trailing space leaves an empty final word, which still adds a space
        assert!(lines.last().unwrap().text.ends_with("DONNNNNNNNNNNN  "));
    }

    #[test]
    fn centred_title() {
        let line = layout_centred_line("Title", &TenAtTwelve, Pt(24.0), LETTER, Pt(96.0));
        // 5 chars * 20pt
        assert_eq!(line.coords, (Pt(256.0), Pt(696.0)));
        assert_eq!(line.text, "Title");
    }
}
