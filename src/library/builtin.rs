use crate::character::{CharacterRecord, Difficulty};

use crate::character::Difficulty::{Advanced, Beginner, Intermediate};

// (id, glyph, pinyin, meaning, english, strokes, difficulty)
type Row = (&'static str, &'static str, &'static str, &'static str, &'static str, u32, Difficulty);

const NUMBERS: &[Row] = &[
    ("num-0", "零", "líng", "zero", "zero", 13, Advanced),
    ("num-1", "一", "yī", "one", "one", 1, Beginner),
    ("num-2", "二", "èr", "two", "two", 2, Beginner),
    ("num-3", "三", "sān", "three", "three", 3, Beginner),
    ("num-4", "四", "sì", "four", "four", 5, Beginner),
    ("num-5", "五", "wǔ", "five", "five", 4, Beginner),
    ("num-6", "六", "liù", "six", "six", 4, Beginner),
    ("num-7", "七", "qī", "seven", "seven", 2, Beginner),
    ("num-8", "八", "bā", "eight", "eight", 2, Beginner),
    ("num-9", "九", "jiǔ", "nine", "nine", 2, Beginner),
    ("num-10", "十", "shí", "ten", "ten", 2, Beginner),
];

const LARGE_NUMBERS: &[Row] = &[
    ("num-100", "百", "bǎi", "hundred", "hundred", 6, Intermediate),
    ("num-1000", "千", "qiān", "thousand", "thousand", 3, Beginner),
    ("num-10000", "万", "wàn", "ten thousand", "ten thousand", 3, Beginner),
];

const BASIC: &[Row] = &[
    ("basic-1", "你", "nǐ", "you", "you", 7, Beginner),
    ("basic-2", "好", "hǎo", "good", "good", 6, Beginner),
    ("basic-3", "我", "wǒ", "I/me", "I, me", 7, Beginner),
    ("basic-4", "他", "tā", "he/him", "he, him", 5, Beginner),
    ("basic-5", "她", "tā", "she/her", "she, her", 6, Beginner),
    ("basic-6", "是", "shì", "to be", "is, am, are", 9, Intermediate),
    ("basic-7", "不", "bù", "not", "not, no", 4, Beginner),
    ("basic-8", "的", "de", "possessive particle", "'s (possessive)", 8, Intermediate),
    ("basic-9", "了", "le", "completed action", "(past tense marker)", 2, Beginner),
    ("basic-10", "在", "zài", "at/in/on", "at, in, on", 6, Intermediate),
];

const LEARNING: &[Row] = &[
    ("learn-1", "学", "xué", "study/learn", "study, learn", 8, Intermediate),
    ("learn-2", "生", "shēng", "student/life", "student, life", 5, Beginner),
    ("learn-3", "书", "shū", "book", "book", 4, Beginner),
    ("learn-4", "字", "zì", "character/word", "character, word", 6, Intermediate),
    ("learn-5", "文", "wén", "writing/language", "writing, language", 4, Beginner),
    ("learn-6", "读", "dú", "read", "read", 10, Advanced),
    ("learn-7", "写", "xiě", "write", "write", 5, Intermediate),
    ("learn-8", "说", "shuō", "speak/say", "speak, say", 9, Advanced),
];

const FAMILY: &[Row] = &[
    ("fam-1", "爸", "bà", "dad", "dad, father", 8, Intermediate),
    ("fam-2", "妈", "mā", "mom", "mom, mother", 6, Beginner),
    ("fam-3", "哥", "gē", "older brother", "older brother", 10, Intermediate),
    ("fam-4", "姐", "jiě", "older sister", "older sister", 8, Intermediate),
    ("fam-5", "弟", "dì", "younger brother", "younger brother", 7, Intermediate),
    ("fam-6", "妹", "mèi", "younger sister", "younger sister", 8, Intermediate),
    ("fam-7", "家", "jiā", "home/family", "home, family", 10, Advanced),
];

const VERBS: &[Row] = &[
    ("verb-1", "吃", "chī", "eat", "eat", 6, Beginner),
    ("verb-2", "喝", "hē", "drink", "drink", 12, Advanced),
    ("verb-3", "看", "kàn", "look/watch", "look, watch, see", 9, Intermediate),
    ("verb-4", "听", "tīng", "listen", "listen", 7, Intermediate),
    ("verb-5", "来", "lái", "come", "come", 7, Intermediate),
    ("verb-6", "去", "qù", "go", "go", 5, Beginner),
    ("verb-7", "做", "zuò", "do/make", "do, make", 11, Advanced),
    ("verb-8", "有", "yǒu", "have", "have", 6, Beginner),
    ("verb-9", "想", "xiǎng", "think/want", "think, want", 13, Advanced),
    ("verb-10", "爱", "ài", "love", "love", 10, Advanced),
];

const TIME: &[Row] = &[
    ("time-1", "天", "tiān", "day/sky", "day, sky", 4, Beginner),
    ("time-2", "年", "nián", "year", "year", 6, Intermediate),
    ("time-3", "月", "yuè", "month/moon", "month, moon", 4, Beginner),
    ("time-4", "日", "rì", "day/sun", "day, sun", 4, Beginner),
    ("time-5", "时", "shí", "time/hour", "time, hour", 7, Intermediate),
    ("time-6", "分", "fēn", "minute/divide", "minute, divide", 4, Beginner),
    ("time-7", "今", "jīn", "today/now", "today, now", 4, Beginner),
    ("time-8", "昨", "zuó", "yesterday", "yesterday", 9, Advanced),
    ("time-9", "明", "míng", "tomorrow/bright", "tomorrow, bright", 8, Intermediate),
];

const SECTIONS: &[(&str, &[Row])] = &[
    ("numbers", NUMBERS),
    ("largeNumbers", LARGE_NUMBERS),
    ("basic", BASIC),
    ("learning", LEARNING),
    ("family", FAMILY),
    ("verbs", VERBS),
    ("time", TIME),
];

/// The compiled-in library, in table order. Frequency rank follows that order.
pub fn builtin_characters() -> Vec<CharacterRecord> {
    SECTIONS
        .iter()
        .flat_map(|(category, rows)| rows.iter().map(move |row| (*category, row)))
        .enumerate()
        .map(|(index, (category, &(id, glyph, pinyin, meaning, english, strokes, difficulty)))| {
            CharacterRecord::new(id, glyph, pinyin, meaning)
                .with_english_gloss(english)
                .with_stroke_count(strokes)
                .with_difficulty(difficulty)
                .with_category(category)
                .with_frequency(Some(index as u32 + 1))
        })
        .collect()
}
