use jieba_rs::Jieba;

/// Part-of-speech tag given to whitespace tokens.
pub const SPACE_TAG: &str = "space";

/// Word segmentation with part-of-speech tags.
pub trait Segmenter {
    /// Yields `(token, tag)` pairs covering `text` in order.
    fn segments<'a>(&'a self, text: &'a str) -> impl Iterator<Item = (&'a str, &'a str)> + 'a;
}

pub struct JiebaSegmenter {
    jieba: Jieba,
}

impl JiebaSegmenter {
    pub fn new() -> Self {
        JiebaSegmenter { jieba: Jieba::new() }
    }
}

impl Default for JiebaSegmenter {
    fn default() -> Self {
        Self::new()
    }
}

impl Segmenter for JiebaSegmenter {
    fn segments<'a>(&'a self, text: &'a str) -> impl Iterator<Item = (&'a str, &'a str)> + 'a {
        self.jieba
            .tag(text, true)
            .into_iter()
            .map(|tag| (tag.word, tag.tag))
    }
}
