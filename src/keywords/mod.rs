// Keyword mining — tokenize the suspicious part of a dataset and rank tokens
// by frequency.

pub mod count;
pub mod extractor;
pub mod tokenize;
