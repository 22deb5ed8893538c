// Heuristic risk scoring — keyword text score, sender domain, links, and the
// combined verdict.

pub mod domain;
pub mod lexicon;
pub mod links;
pub mod similarity;
pub mod text;
pub mod traits;
pub mod verdict;
