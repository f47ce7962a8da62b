// Reusable library API — visible to the CLI and to integration tests
pub mod cypher_word;
pub mod errors;
pub mod hint;
pub mod legend;
pub mod log;
pub mod puzzle_piece;
pub mod quip_char;
pub mod solver;
pub mod word_list;
