//! [`Faq`] definitions.

use super::define_text;

/// Frequently asked question with its answer.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Faq {
    /// ID of this [`Faq`].
    pub id: Id,

    /// [`Question`] of this [`Faq`].
    pub question: Question,

    /// [`Answer`] to the [`Question`].
    pub answer: Answer,
}

define_text! {
    #[doc = "ID of a [`Faq`]."]
    Id(max = 64)
}

define_text! {
    #[doc = "Question of a [`Faq`]."]
    Question(max = 512)
}

define_text! {
    #[doc = "Answer of a [`Faq`]."]
    Answer(max = 4096)
}
