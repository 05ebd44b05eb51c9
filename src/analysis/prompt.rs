//! Prompt Builder
//!
//! Builds the instruction sent to the model for a single word lookup.

/// Build the analysis prompt for `word` as it appears in `text`.
///
/// Both values are embedded verbatim, empty strings included. The model is
/// asked to answer with exactly two labelled lines, `meaning:` then `context:`,
/// which is the shape [`parse_reply`](super::parse_reply) expects.
pub fn build_prompt(word: &str, text: &str) -> String {
    format!(
        "You are an expert dictionary and context analyzer.\n\
         Word: {word}\n\
         Text: {text}\n\
         \n\
         Return strictly in following format:\n\
         meaning: meaning of the word\n\
         context: how the word is used (keep it short, one liner)\n"
    )
}
