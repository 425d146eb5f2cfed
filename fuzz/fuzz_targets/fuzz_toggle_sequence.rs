#![no_main]
use facet_filter::filter::{FacetWidget, MatchMode};
use facet_filter::model::{Catalog, Item};
use libfuzzer_sys::fuzz_target;

/// Fuzz toggle sequences against a small fixed catalog.
///
/// The first byte picks the mode, every following byte toggles one of a few
/// facets. Group visibility must always follow item visibility.
fuzz_target!(|data: &[u8]| {
    let Some((&mode, toggles)) = data.split_first() else {
        return;
    };
    let mode = if mode % 2 == 0 { MatchMode::Any } else { MatchMode::All };

    let Ok(catalog) = Catalog::builder()
        .group("G1", None)
        .group("G2", None)
        .item(Item::new("I1", "G1").with_facets(["a", "b"]))
        .item(Item::new("I2", "G1").with_facets(["b"]))
        .item(Item::new("I3", "G2").with_facets(["c"]))
        .build()
    else {
        return;
    };

    let mut widget = FacetWidget::new(catalog, mode);
    for byte in toggles {
        let facet = ["a", "b", "c", "d"][usize::from(byte % 4)];
        let decisions = widget.toggle_facet(facet);
        let g1 = decisions.items["I1"] || decisions.items["I2"];
        assert_eq!(decisions.groups["G1"], g1 || decisions.is_unfiltered());
    }
});
