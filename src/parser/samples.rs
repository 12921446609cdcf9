use tracing::warn;

use super::segment::{normalize_nbsp, segment_block};
use super::task::TestCase;

/// Pair the page's sample blocks into test cases.
///
/// Blocks alternate input, output, input, output in document order. Segments
/// from every input-indexed block form one flat input list, output blocks
/// symmetrically, and entry k of each list pairs positionally. Only inputs
/// are nbsp-normalized.
///
/// A count mismatch signals unexpected page structure: it is reported as a
/// diagnostic and pairing proceeds to the shorter length.
pub fn pair_samples(blocks: &[String]) -> (Vec<TestCase>, Vec<String>) {
    let mut diagnostics = Vec::new();
    let mut inputs = Vec::new();
    let mut outputs = Vec::new();

    let mut i = 0;
    while i + 1 < blocks.len() {
        for seg in segment_block(&blocks[i]) {
            inputs.push(normalize_nbsp(&seg));
        }
        outputs.extend(segment_block(&blocks[i + 1]));
        i += 2;
    }

    if blocks.len() % 2 == 1 {
        diagnostics.push(format!(
            "Odd number of sample blocks ({}); trailing block has no partner and was skipped",
            blocks.len()
        ));
    }

    if inputs.len() != outputs.len() {
        let msg = format!(
            "The number of sample inputs ({}) and outputs ({}) are not the same",
            inputs.len(),
            outputs.len()
        );
        warn!("{}", msg);
        diagnostics.push(msg);
    }

    let tests = inputs
        .into_iter()
        .zip(outputs)
        .map(|(input, output)| TestCase { input, output })
        .collect();

    (tests, diagnostics)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blocks(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn alternating_blocks_pair_positionally() {
        let (tests, diags) = pair_samples(&blocks(&["5 3", "8", "7 2", "9"]));
        assert_eq!(tests.len(), 2);
        assert_eq!(tests[0].input, "5 3\n");
        assert_eq!(tests[0].output, "8\n");
        assert_eq!(tests[1].input, "7 2\n");
        assert_eq!(tests[1].output, "9\n");
        assert!(diags.is_empty());
    }

    #[test]
    fn prose_inside_a_block_multiplies_samples() {
        // One input block and one output block, each split in two by prose.
        let (tests, diags) =
            pair_samples(&blocks(&["5 3<br>第二组样例<br>7 2", "8<br>第二组输出<br>9"]));
        assert_eq!(tests.len(), 2);
        assert_eq!(tests[1].input, "7 2\n");
        assert_eq!(tests[1].output, "9\n");
        assert!(diags.is_empty());
    }

    #[test]
    fn mismatch_truncates_and_reports() {
        let (tests, diags) = pair_samples(&blocks(&["a<br>说明<br>b", "x"]));
        assert_eq!(tests.len(), 1);
        assert_eq!(tests[0].input, "a\n");
        assert_eq!(tests[0].output, "x\n");
        assert_eq!(diags.len(), 1);
        assert!(diags[0].contains("not the same"));
    }

    #[test]
    fn odd_block_count_skips_trailing_block() {
        let (tests, diags) = pair_samples(&blocks(&["1", "2", "3"]));
        assert_eq!(tests.len(), 1);
        assert!(diags.iter().any(|d| d.contains("Odd number")));
    }

    #[test]
    fn single_block_produces_nothing() {
        let (tests, diags) = pair_samples(&blocks(&["1 2 3"]));
        assert!(tests.is_empty());
        assert!(diags.iter().any(|d| d.contains("Odd number")));
    }

    #[test]
    fn no_blocks_is_quietly_empty() {
        let (tests, diags) = pair_samples(&[]);
        assert!(tests.is_empty());
        assert!(diags.is_empty());
    }

    #[test]
    fn inputs_are_nbsp_normalized_outputs_are_not() {
        let (tests, _) = pair_samples(&blocks(&["5\u{00A0}3", "8\u{00A0}0"]));
        assert_eq!(tests[0].input, "5 3\n");
        assert_eq!(tests[0].output, "8\u{00A0}0\n");
    }

    #[test]
    fn all_prose_input_block_contributes_nothing() {
        let (tests, diags) = pair_samples(&blocks(&["全是说明文字。", "42"]));
        assert!(tests.is_empty());
        assert_eq!(diags.len(), 1);
    }
}
