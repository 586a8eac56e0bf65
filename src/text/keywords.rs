use super::char_len;

/// Maximum number of keywords returned by [`extract_keywords`].
pub const MAX_KEYWORDS: usize = 5;

const DELIMITERS: &[char] = &[',', ';', ':', '.', '，', '；', '：', '。', '、'];

/// Common function words, English and CJK, that carry no locating signal.
const STOP_WORDS: &[&str] = &[
    "a", "an", "and", "are", "as", "at", "be", "but", "by", "for", "from", "has", "have", "in",
    "into", "is", "it", "its", "of", "on", "or", "that", "the", "their", "this", "to", "was",
    "were", "with", "which", "what", "how", "why", "who", "when", "where", "can", "will", "not",
    "do", "does", "about", "over", "than", "then", "these", "those", "also", "more", "most",
    "的", "了", "和", "是", "在", "与", "及", "或", "等", "对", "中", "为", "以", "将", "把", "被",
    "这", "那", "其", "之", "也", "都", "而", "并", "就", "从", "到", "由", "于", "上", "下",
    "一个", "我们", "他们", "以及", "通过", "进行", "可以", "没有", "什么", "如何", "这个", "那个",
];

fn is_stop_word(token: &str) -> bool {
    let lower = token.to_lowercase();
    STOP_WORDS.contains(&lower.as_str())
}

/// Reduce a node's text to at most [`MAX_KEYWORDS`] salient tokens in their
/// original order.
pub fn extract_keywords(text: &str) -> Vec<String> {
    let mut keywords: Vec<String> = Vec::new();

    for piece in text.split(|c: char| c.is_whitespace() || DELIMITERS.contains(&c)) {
        let piece = piece.trim();
        if char_len(piece) <= 1 || is_stop_word(piece) {
            continue;
        }
        if keywords.iter().any(|k| k == piece) {
            continue;
        }
        keywords.push(piece.to_string());
        if keywords.len() == MAX_KEYWORDS {
            break;
        }
    }

    keywords
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drops_stop_words_and_short_pieces() {
        let kws = extract_keywords("The history of a Rust compiler");
        assert_eq!(kws, vec!["history", "Rust", "compiler"]);
    }

    #[test]
    fn splits_on_delimiters_and_dedups() {
        let kws = extract_keywords("caching; eviction, caching: LRU.policy\nTTL");
        assert_eq!(kws, vec!["caching", "eviction", "LRU", "policy", "TTL"]);
    }

    #[test]
    fn caps_at_five() {
        let kws = extract_keywords("alpha beta gamma delta epsilon zeta eta");
        assert_eq!(kws.len(), MAX_KEYWORDS);
        assert_eq!(kws[4], "epsilon");
    }

    #[test]
    fn cjk_delimiters() {
        let kws = extract_keywords("机器学习，深度学习、的");
        assert_eq!(kws, vec!["机器学习", "深度学习"]);
    }

    #[test]
    fn empty_input() {
        assert!(extract_keywords("").is_empty());
        assert!(extract_keywords("a , ; the").is_empty());
    }
}
