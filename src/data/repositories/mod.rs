pub mod dictionary;
pub mod sentence;

pub use dictionary::DictionaryRepository;
pub use sentence::SentenceRepository;
