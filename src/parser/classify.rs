/// Full-width punctuation that marks a line as Chinese prose even when no
/// ideograph is present.
pub const CJK_PUNCTUATION: &[char] = &[
    '。', '；', '，', '：', '“', '”', '（', '）', '、', '？', '《', '》', '！', '【', '】', '￥',
];

/// True if `text` reads as natural-language commentary rather than sample
/// data.
///
/// Problem pages interleave explanatory Chinese and literal test data inside
/// the same `pre` with no distinguishing markup, so the presence of CJK
/// script is the only usable discriminant. A line mixing ideographs with
/// digits counts as prose in its entirety.
pub fn is_prose_line(text: &str) -> bool {
    text.chars()
        .any(|c| is_cjk_ideograph(c) || CJK_PUNCTUATION.contains(&c))
}

fn is_cjk_ideograph(c: char) -> bool {
    // CJK Unified Ideographs
    matches!(c as u32, 0x4E00..=0x9FFF)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ideographs_are_prose() {
        assert!(is_prose_line("题目说明文字"));
        assert!(is_prose_line("输入共一行"));
    }

    #[test]
    fn each_punctuation_mark_is_prose() {
        for &mark in CJK_PUNCTUATION {
            assert!(is_prose_line(&mark.to_string()), "{mark} should be prose");
        }
    }

    #[test]
    fn data_lines_are_not_prose() {
        assert!(!is_prose_line("5 3"));
        assert!(!is_prose_line("abc XYZ 123"));
        assert!(!is_prose_line("  \t "));
        assert!(!is_prose_line("-1,000,000 ~ 1,000,000 (50%)"));
        assert!(!is_prose_line(""));
    }

    #[test]
    fn mixed_lines_are_wholly_prose() {
        assert!(is_prose_line("5 3 （第一组）"));
        assert!(is_prose_line("n=10，m=20"));
    }

    #[test]
    fn halfwidth_punctuation_is_not_prose() {
        assert!(!is_prose_line("(a+b)*c; x:1, y:2? !"));
    }
}
