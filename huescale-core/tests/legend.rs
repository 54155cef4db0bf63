#![allow(clippy::uninlined_format_args)]
use huescale_core::{legend, Rgb, ScaleId};

fn rendered(id: ScaleId, input: i32) -> Rgb {
    id.render(input).parse().unwrap()
}

#[test]
fn test_legend_has_low_middle_high() {
    for id in ScaleId::ALL {
        let [low, middle, high] = legend(id);
        assert_eq!(low.swatch().unwrap(), rendered(id, 0), "{} low", id);
        assert_eq!(middle.swatch().unwrap(), rendered(id, 50), "{} middle", id);
        assert_eq!(high.swatch().unwrap(), rendered(id, 100), "{} high", id);
    }
}

#[test]
fn test_legend_endpoints_are_stops() {
    for id in ScaleId::ALL {
        let stops = id.scale().stops();
        let entries = id.legend();
        assert_eq!(entries[0].swatch().unwrap(), stops[0].color, "{}", id);
        assert_eq!(
            entries[2].swatch().unwrap(),
            stops[stops.len() - 1].color,
            "{}",
            id
        );
    }
}

#[test]
fn test_legend_names() {
    let names: Vec<_> = legend(ScaleId::RedYellowGreen)
        .iter()
        .map(|entry| entry.name)
        .collect();
    assert_eq!(names, ["red", "yellow", "green"]);
    assert_eq!(legend(ScaleId::PeacockMint)[1].rgb, "rgb(40, 175, 141)");
}
