pub mod model;
pub mod naive_bayes;
pub mod tokenizer;
pub mod types;
pub mod vectorizer;
