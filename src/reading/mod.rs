pub mod classify;
pub mod fixation;
pub mod rare;
pub mod stopwords;
pub mod token;

pub use classify::{classify_tokens, Category, ClassifiedToken};
pub use fixation::{fixation_split, is_fixation_eligible, saccade_stride};
pub use rare::{count_words, FrequencyCounter, RareWordSource};
pub use stopwords::StopwordTier;
pub use token::{is_separator, split_text, Separators};
