use hanzi_pad::filter::apply;
use hanzi_pad::library::builtin_characters;
use hanzi_pad::{CharacterRecord, Difficulty, FilterSortConfig, SortBy, SortOrder, StrokeRange};

fn ni_hao() -> Vec<CharacterRecord> {
    vec![
        CharacterRecord::new("1", "你", "ni", "you")
            .with_stroke_count(7)
            .with_frequency(Some(2)),
        CharacterRecord::new("2", "好", "hao", "good")
            .with_stroke_count(6)
            .with_frequency(Some(1)),
    ]
}

fn glyphs(records: &[&CharacterRecord]) -> Vec<String> {
    records.iter().map(|r| r.glyph().to_owned()).collect()
}

#[test]
fn sorts_by_strokes_ascending() {
    let records = ni_hao();
    let config = FilterSortConfig::sorted(SortBy::Strokes, SortOrder::Ascending);
    assert_eq!(glyphs(&apply(&records, &config)), vec!["好", "你"]);
}

#[test]
fn query_matches_pronunciation() {
    let records = ni_hao();
    let config = FilterSortConfig::sorted(SortBy::Strokes, SortOrder::Ascending).with_query("ni");
    assert_eq!(glyphs(&apply(&records, &config)), vec!["你"]);
}

#[test]
fn unfiltered_result_is_a_permutation_of_the_input() {
    let records = builtin_characters();
    for sort_by in SortBy::ALL {
        for order in [SortOrder::Ascending, SortOrder::Descending] {
            let result = apply(&records, &FilterSortConfig::sorted(sort_by, order));
            let mut ids: Vec<&str> = result.iter().map(|r| r.id()).collect();
            let mut expected: Vec<&str> = records.iter().map(|r| r.id()).collect();
            ids.sort_unstable();
            expected.sort_unstable();
            assert_eq!(ids, expected, "{sort_by:?} {order:?}");
        }
    }
}

#[test]
fn input_is_left_untouched() {
    let records = builtin_characters();
    let before = records.clone();
    let config = FilterSortConfig::sorted(SortBy::Alphabetical, SortOrder::Descending).with_query("a");
    let _ = apply(&records, &config);
    assert_eq!(records, before);
}

#[test]
fn filtering_twice_gives_the_same_set() {
    let records = builtin_characters();
    let config = FilterSortConfig::default()
        .with_query("o")
        .with_difficulty(Some(Difficulty::Beginner));

    let once: Vec<CharacterRecord> = apply(&records, &config).into_iter().cloned().collect();
    let twice = apply(&once, &config);
    assert_eq!(glyphs(&twice), glyphs(&once.iter().collect::<Vec<_>>()));
}

#[test]
fn equal_keys_keep_input_order_in_both_directions() {
    let records = vec![
        CharacterRecord::new("a", "三", "sān", "three").with_stroke_count(3),
        CharacterRecord::new("b", "千", "qiān", "thousand").with_stroke_count(3),
        CharacterRecord::new("c", "一", "yī", "one").with_stroke_count(1),
        CharacterRecord::new("d", "万", "wàn", "ten thousand").with_stroke_count(3),
    ];

    let asc = apply(&records, &FilterSortConfig::sorted(SortBy::Strokes, SortOrder::Ascending));
    assert_eq!(glyphs(&asc), vec!["一", "三", "千", "万"]);

    let desc = apply(&records, &FilterSortConfig::sorted(SortBy::Strokes, SortOrder::Descending));
    assert_eq!(glyphs(&desc), vec!["三", "千", "万", "一"]);
}

#[test]
fn reversing_order_reverses_output_without_ties() {
    // builtin frequency ranks are distinct
    let records = builtin_characters();
    let asc = apply(&records, &FilterSortConfig::sorted(SortBy::Frequency, SortOrder::Ascending));
    let mut desc = apply(&records, &FilterSortConfig::sorted(SortBy::Frequency, SortOrder::Descending));
    desc.reverse();
    assert_eq!(glyphs(&asc), glyphs(&desc));
}

#[test]
fn single_value_stroke_range() {
    let records = builtin_characters();
    let config = FilterSortConfig::default().with_stroke_range(Some(StrokeRange::new(5, 5)));
    let result = apply(&records, &config);
    assert!(!result.is_empty());
    assert!(result.iter().all(|r| r.stroke_count() == 5));
}

#[test]
fn unknown_frequency_sinks_to_the_end() {
    let records = vec![
        CharacterRecord::new("x", "字", "zì", "character"),
        CharacterRecord::new("y", "书", "shū", "book").with_frequency(Some(40)),
        CharacterRecord::new("z", "文", "wén", "writing").with_frequency(Some(3)),
    ];
    let result = apply(&records, &FilterSortConfig::sorted(SortBy::Frequency, SortOrder::Ascending));
    assert_eq!(glyphs(&result), vec!["文", "书", "字"]);
}

#[test]
fn difficulty_sort_uses_rank() {
    let records = vec![
        CharacterRecord::new("1", "喝", "hē", "drink").with_difficulty(Difficulty::Advanced),
        CharacterRecord::new("2", "一", "yī", "one").with_difficulty(Difficulty::Beginner),
        CharacterRecord::new("3", "学", "xué", "study").with_difficulty(Difficulty::Intermediate),
    ];
    let result = apply(&records, &FilterSortConfig::sorted(SortBy::Difficulty, SortOrder::Ascending));
    assert_eq!(glyphs(&result), vec!["一", "学", "喝"]);
}

#[test]
fn filters_are_conjunctive() {
    let records = builtin_characters();
    let config = FilterSortConfig::default()
        .with_category(Some("family".to_owned()))
        .with_difficulty(Some(Difficulty::Advanced));
    assert_eq!(glyphs(&apply(&records, &config)), vec!["家"]);
}

#[test]
fn vacuous_filter_is_an_empty_result() {
    let records = builtin_characters();
    let config = FilterSortConfig::default().with_query("zzz");
    assert!(apply(&records, &config).is_empty());
}
