/// Separators that read as "label: value" and should split words rather
/// than glue them together.
const COLON_LIKE: &[char] = &[':', '：', '∶', '﹕', '꞉'];

/// Full-width and CJK punctuation that `char::is_ascii_punctuation` misses.
const CJK_PUNCTUATION: &[char] = &[
    '，', '。', '、', '；', '！', '？', '“', '”', '‘', '’', '（', '）', '【', '】', '《', '》',
    '〈', '〉', '「', '」', '『', '』', '〔', '〕', '…', '—', '–', '·', '・', '～', '￥', '〜',
    '．', '＂', '＇', '［', '］', '｛', '｝', '｜', '＼', '／', '＃', '＆', '＊', '＋', '－',
    '＝', '＜', '＞', '＠', '＾', '＿', '｀', '％', '＄', '«', '»', '¿', '¡', '•',
];

#[inline]
fn is_punctuation(c: char) -> bool {
    c.is_ascii_punctuation() || CJK_PUNCTUATION.contains(&c)
}

/// Canonicalize text for comparison.
///
/// Lowercases, turns colon-like separators into spaces, strips ASCII and CJK
/// punctuation, collapses whitespace runs and trims. Total and idempotent.
pub fn normalize(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut pending_space = false;

    for c in input.chars() {
        if COLON_LIKE.contains(&c) || c.is_whitespace() {
            pending_space = true;
            continue;
        }
        if is_punctuation(c) {
            continue;
        }
        if pending_space && !out.is_empty() {
            out.push(' ');
        }
        pending_space = false;
        out.extend(c.to_lowercase());
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn folds_case_and_whitespace() {
        assert_eq!(normalize("  Hello \t\n  World  "), "hello world");
    }

    #[test]
    fn colon_becomes_space() {
        assert_eq!(normalize("A: B"), normalize("A B"));
        assert_eq!(normalize("背景：历史"), "背景 历史");
    }

    #[test]
    fn strips_ascii_and_cjk_punctuation() {
        assert_eq!(normalize("Hello, world!"), "hello world");
        assert_eq!(normalize("《人工智能》，简介。"), "人工智能简介");
        assert_eq!(normalize("Artificial Intelligence (AI)"), "artificial intelligence ai");
    }

    #[test]
    fn empty_and_punctuation_only() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize(" ,.;! "), "");
    }

    #[test]
    fn idempotent_on_mixed_input() {
        for s in ["Intro: The *Basics*", "第一章：概述", "  a  b  ", "x:y:z"] {
            let once = normalize(s);
            assert_eq!(normalize(&once), once);
        }
    }
}
