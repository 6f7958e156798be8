/// Splits a document into block strings on blank-line separators.
///
/// Each piece is trimmed of surrounding whitespace; pieces that are empty
/// after trimming are discarded, so runs of three or more newlines never
/// produce phantom blocks. An empty or whitespace-only document yields an
/// empty Vec.
pub fn segment_blocks(document: &str) -> Vec<String> {
    document
        .split("\n\n")
        .map(str::trim)
        .filter(|block| !block.is_empty())
        .map(str::to_string)
        .collect()
}
