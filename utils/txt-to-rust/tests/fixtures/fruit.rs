// Auto-generated from fruit.txt

pub const LENGTH: usize = 4;
pub const WORDS: [&'static str; LENGTH] = [
    "apple",
    "banana",
    "#hashtag",
    "he said \"hi\"\\now",
];
