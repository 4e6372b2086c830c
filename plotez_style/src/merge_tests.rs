// Copyright 2025 the plotez Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

extern crate std;

use alloc::string::String;
use alloc::vec::Vec;
use std::collections::HashMap;

use crate::{
    ConfigurationError, ErrorBarStyle, LineStyle, OverrideMapping, ScatterStyle, StyleParams,
    StyleValue, SubplotStyle, merge_style, plot_dictionary_handler,
};

/// A valid value for each attribute kind, distinct from every default.
fn sample_value(attr: &crate::Attribute) -> StyleValue {
    match attr.kind {
        crate::AttributeKind::Text => StyleValue::from("k"),
        crate::AttributeKind::Number => StyleValue::from(0.25),
        crate::AttributeKind::Flag => StyleValue::from(true),
        crate::AttributeKind::Size => StyleValue::Pair(3.0, 2.0),
    }
}

/// Merges every subset (by bitmask) of the attribute table and checks that exactly the
/// chosen keys changed.
fn check_every_subset<S: StyleParams>() {
    let attrs = S::attributes();
    let defaults = S::default();
    // 2^13 subsets for the largest table; small enough to enumerate.
    for mask in 0_u32..(1 << attrs.len()) {
        let chosen: Vec<_> = attrs
            .iter()
            .enumerate()
            .filter(|(i, _)| mask & (1 << i) != 0)
            .map(|(_, a)| a)
            .collect();
        let overrides: OverrideMapping = chosen
            .iter()
            .map(|a| (a.label, sample_value(a)))
            .collect();
        let merged = merge_style(&defaults, Some(&overrides)).expect("known keys");
        for attr in attrs {
            let expected = if chosen.contains(&attr) {
                Some(sample_value(attr))
            } else {
                defaults.get(attr.label).cloned()
            };
            assert_eq!(
                merged.get(attr.label).cloned(),
                expected,
                "{}: `{}` with mask {mask:#b}",
                S::KIND,
                attr.label
            );
        }
    }
}

#[test]
fn merging_any_subset_replaces_exactly_those_keys() {
    check_every_subset::<LineStyle>();
    check_every_subset::<ScatterStyle>();
    check_every_subset::<ErrorBarStyle>();
    check_every_subset::<SubplotStyle>();
}

#[test]
fn any_unknown_key_fails_the_merge() {
    for bad in ["Color", "linewidth", "", "c", "capsize "] {
        let overrides = OverrideMapping::new().with("lw", 1.0).with(bad, "x");
        let err = merge_style(&LineStyle::default(), Some(&overrides)).expect_err(bad);
        assert_eq!(
            err,
            ConfigurationError::UnknownAttribute {
                kind: "LineStyle",
                keys: alloc::vec![String::from(bad)],
            },
            "key {bad:?}"
        );
    }
}

#[test]
fn merge_without_overrides_is_identity() {
    let style = LineStyle::default().with_line_style("--");
    assert_eq!(merge_style(&style, None), Ok(style), "no overrides");
}

#[test]
fn dictionary_handler_defaults_to_type_defaults() {
    let dict = plot_dictionary_handler::<LineStyle>(None, None).expect("defaults");
    assert_eq!(dict.len(), 1, "only the color cycle");
    assert!(dict.get("color").is_some_and(StyleValue::is_list), "color cycle");

    let style = ScatterStyle::default().with_size(50);
    let overrides = OverrideMapping::new().with("alpha", 0.5);
    let dict = plot_dictionary_handler(Some(&style), Some(&overrides)).expect("valid");
    assert_eq!(dict.get("s"), Some(&StyleValue::from(50)), "style kept");
    assert_eq!(dict.get("alpha"), Some(&StyleValue::from(0.5)), "override applied");
}

#[test]
fn equal_styles_are_interchangeable_map_keys() {
    let a = LineStyle::default()
        .with_line_style(StyleValue::list(["-"]))
        .with_alpha(0.0);
    let b = LineStyle::default()
        .with_line_style(StyleValue::list(["-"]))
        .with_alpha(-0.0);
    assert_eq!(a, b, "structurally equal");

    let mut seen: HashMap<LineStyle, usize> = HashMap::new();
    *seen.entry(a).or_default() += 1;
    *seen.entry(b).or_default() += 1;
    assert_eq!(seen.len(), 1, "same hash bucket");
    assert_eq!(seen.values().copied().sum::<usize>(), 2, "both counted");
}

#[test]
fn label_wins_over_field_name_for_the_same_attribute() {
    let overrides = OverrideMapping::new()
        .with("line_style", ":")
        .with("ls", "--");
    let merged = merge_style(&LineStyle::default(), Some(&overrides)).expect("valid");
    assert_eq!(merged.line_style, Some("--".into()), "label wins");
}

#[test]
fn label_wins_even_when_it_sorts_before_the_field_name() {
    let overrides = OverrideMapping::new()
        .with("c", "red")
        .with("color", "blue")
        .with("s", 4.0)
        .with("size", 9.0);
    let merged = merge_style(&ScatterStyle::default(), Some(&overrides)).expect("valid");
    assert_eq!(merged.color, Some("red".into()), "`c` wins over `color`");
    assert_eq!(merged.size, Some(4.0.into()), "`s` wins over `size`");
}
