//! Runs against the DejaVu fonts when they are installed; each test returns early otherwise.

use fontdb::{Database, Family, Query, Stretch, Style, Weight};
use glyphwrap::{FontSource, GlyphWrapper, Pt, SystemFont};

const LOREM: &str = "Lorem ipsum dolor sit amet";

const LONG_LOREM: &str = "Lorem ipsum dolor sit amet, facilisis animi quam id mollis, vestibulum a mauris magna mi euismod, tristique lectus aliquam ut aliquet tristique, in amet mauris amet tellus, sed tempor diam vel lectus vitae. Elit et nonummy nunc vitae elit, pede cum non id adipiscing. Posuere cubilia ligula sodales, nisl placerat ipsum, libero odio pellentesque risus eu sagittis et, amet sit, ut vitae urna quis ac non. A eget nunc mauris wisi, purus ac aliquam, odio aliquam.";

const HARD_WRAPPED: &str = "Lorem ipsum dolor sit amet, his dicant semper verterem ea, nec ea latine\r\ndolorum. Cum malorum forensibus definiebas te, ad wisi congue noster per.\r\nDebitis sensibus id sea, debitis adipisci perpetua at sea, ius aeque singulis\nno. Pro vidit consul detracto ad, velit dicunt te ius, nec cu unum oblique\nscripserit.";

/// Text, font size, expected width, and `(max width, expected lines)` pairs.
struct Case {
    text: &'static str,
    font_size: f32,
    width: f32,
    wraps: &'static [(f32, &'static [&'static str])],
}

const CASES: &[Case] = &[
    Case {
        text: LOREM,
        font_size: 12.0,
        width: 165.3046875,
        wraps: &[
            (1000.0, &[LOREM]),
            (100.0, &["Lorem ipsum", "dolor sit amet"]),
            (0.0, &["Lorem", "ipsum", "dolor", "sit", "amet"]),
        ],
    },
    Case {
        text: LOREM,
        font_size: 8.0,
        width: 165.3046875 * 8.0 / 12.0,
        wraps: &[
            (1000.0, &[LOREM]),
            (100.0, &["Lorem ipsum dolor sit", "amet"]),
        ],
    },
    Case {
        text: "Lorem ipsum dolor",
        font_size: 12.0,
        width: 112.25390625,
        wraps: &[(100.0, &["Lorem ipsum", "dolor"])],
    },
    Case {
        text: "dolor sit amet",
        font_size: 12.0,
        width: 83.619140625,
        wraps: &[(100.0, &["dolor sit amet"])],
    },
    Case {
        text: LOREM,
        font_size: 0.0,
        width: 0.0,
        wraps: &[(1000.0, &[LOREM])],
    },
    Case {
        text: "",
        font_size: 12.0,
        width: 0.0,
        wraps: &[(1000.0, &[""])],
    },
    Case {
        text: "Lorem   ipsum   dolor   sit   amet",
        font_size: 12.0,
        width: 195.8203125,
        wraps: &[
            (1000.0, &["Lorem   ipsum   dolor   sit   amet"]),
            (100.0, &["Lorem   ipsum", "dolor   sit   amet"]),
            (0.0, &["Lorem", "ipsum", "dolor", "sit", "amet"]),
        ],
    },
    Case {
        text: "AB",
        font_size: 12.0,
        width: 16.44140625,
        wraps: &[],
    },
    Case {
        text: "A\u{200b}B",
        font_size: 12.0,
        width: 16.44140625,
        wraps: &[],
    },
    Case {
        text: "iil lili illili lllli iiil liiilli llill illiil",
        font_size: 12.0,
        width: 160.060546875,
        wraps: &[
            (1000.0, &["iil lili illili lllli iiil liiilli llill illiil"]),
            (100.0, &["iil lili illili lllli iiil", "liiilli llill illiil"]),
        ],
    },
    Case {
        text: LONG_LOREM,
        font_size: 12.0,
        width: 2742.76171875,
        wraps: &[(
            500.0,
            &[
                "Lorem ipsum dolor sit amet, facilisis animi quam id mollis, vestibulum a mauris",
                "magna mi euismod, tristique lectus aliquam ut aliquet tristique, in amet mauris",
                "amet tellus, sed tempor diam vel lectus vitae. Elit et nonummy nunc vitae elit,",
                "pede cum non id adipiscing. Posuere cubilia ligula sodales, nisl placerat ipsum,",
                "libero odio pellentesque risus eu sagittis et, amet sit, ut vitae urna quis ac non. A",
                "eget nunc mauris wisi, purus ac aliquam, odio aliquam.",
            ],
        )],
    },
    Case {
        text: HARD_WRAPPED,
        font_size: 12.0,
        width: 1883.208984375,
        wraps: &[
            (
                500.0,
                &[
                    "Lorem ipsum dolor sit amet, his dicant semper verterem ea, nec ea latine",
                    "dolorum. Cum malorum forensibus definiebas te, ad wisi congue noster per.",
                    "Debitis sensibus id sea, debitis adipisci perpetua at sea, ius aeque singulis no. Pro",
                    "vidit consul detracto ad, velit dicunt te ius, nec cu unum oblique scripserit.",
                ],
            ),
            (
                300.0,
                &[
                    "Lorem ipsum dolor sit amet, his dicant semper",
                    "verterem ea, nec ea latine dolorum. Cum",
                    "malorum forensibus definiebas te, ad wisi congue",
                    "noster per. Debitis sensibus id sea, debitis",
                    "adipisci perpetua at sea, ius aeque singulis no.",
                    "Pro vidit consul detracto ad, velit dicunt te ius,",
                    "nec cu unum oblique scripserit.",
                ],
            ),
        ],
    },
];

fn system_font(face: &str, style: &str) -> Option<GlyphWrapper> {
    let mut wrapper = GlyphWrapper::from_system(SystemFont::dejavu(face, style));
    wrapper.load_sync().ok()?;
    Some(wrapper)
}

fn dejavu_sans() -> Option<GlyphWrapper> {
    system_font("DejaVuSans", "")
}

fn assert_width(wrapper: &GlyphWrapper, text: &str, font_size: f32, expected: f32) {
    let width = wrapper.compute_width(text, font_size).unwrap();
    assert!(
        width.approx_eq(Pt::from(expected), 1e-4),
        "{text:?} at size {font_size}: got {width}, expected {expected}"
    );
}

#[test]
fn widths_match_reference_values() {
    let Some(wrapper) = dejavu_sans() else { return };
    for case in CASES {
        assert_width(&wrapper, case.text, case.font_size, case.width);
    }
}

#[test]
fn wraps_match_reference_lines() {
    let Some(wrapper) = dejavu_sans() else { return };
    for case in CASES {
        for &(max_width, expected) in case.wraps {
            let lines = wrapper.wrap(case.text, case.font_size, max_width).unwrap();
            assert_eq!(lines, expected, "{:?} at width {max_width}", case.text);

            let widths = wrapper.line_widths(&lines, case.font_size).unwrap();
            for (line, width) in lines.iter().zip(widths) {
                if line.contains(char::is_whitespace) {
                    assert!(
                        width.as_f32() < max_width,
                        "{line:?} is {width} wide with budget {max_width}"
                    );
                }
            }
        }
    }
}

#[test]
fn infinite_width_keeps_one_line() {
    let Some(wrapper) = dejavu_sans() else { return };
    assert_eq!(wrapper.wrap(LOREM, 12, f32::INFINITY).unwrap(), vec![LOREM]);
}

#[test]
fn serif_bold_variant() {
    let Some(wrapper) = system_font("DejaVuSerif", "Bold") else { return };
    assert_width(&wrapper, LOREM, 12.0, 186.720703125);
}

#[test]
fn serif_bold_from_bytes() {
    let mut db = Database::new();
    db.load_system_fonts();
    let Some(id) = db.query(&Query {
        families: &[Family::Name("DejaVu Serif")],
        weight: Weight::BOLD,
        stretch: Stretch::Normal,
        style: Style::Normal,
    }) else {
        return;
    };
    let Some((data, index)) = db.with_face_data(id, |data, index| (data.to_vec(), index)) else {
        return;
    };

    let pending = GlyphWrapper::new(FontSource::bytes(data).with_face_index(index)).load();
    let wrapper = pending.wait().unwrap();
    assert!(wrapper.is_loaded());
    assert_width(&wrapper, LOREM, 12.0, 186.720703125);
}

#[test]
fn background_load_matches_sync_load() {
    let Some(sync) = dejavu_sans() else { return };
    let pending = GlyphWrapper::from_system(SystemFont::dejavu("DejaVuSans", "")).load();
    let wrapper = pending.wait().unwrap();
    assert!(wrapper.is_loaded());
    assert_eq!(
        wrapper.compute_width(LOREM, 12).unwrap(),
        sync.compute_width(LOREM, 12).unwrap()
    );
}

#[test]
fn loading_twice_is_a_no_op() {
    let Some(mut wrapper) = dejavu_sans() else { return };
    wrapper.load_sync().unwrap();
    assert_width(&wrapper, LOREM, 12.0, 165.3046875);
}
