//! Built-in layout preset diagrams.
//!
//! Six built-in layouts ship with the panel:
//! - **standard**: classic 8x8 two-rank setup
//! - **hole**: standard board with a 2x2 hole in the center
//! - **closeup**: shortened board, one empty rank removed
//! - **marathon**: lengthened board, one empty rank added
//! - **double**: ten-rank board with doubled back ranks
//! - **secret_passage**: central wall of holes pierced by a two-file passage
//!
//! The `custom` entry seeds as the empty string for both diagrams.
//!
//! Diagram strings are opaque grids: uppercase/lowercase letters for the two
//! colors' pieces, `_` for an empty square, `X` for a forbidden square. In
//! promotion diagrams `W` marks white's promotion zone and `b` black's. The
//! panel never interprets these characters; the game driver does.

use crate::LayoutName;
use std::collections::HashMap;

const STANDARD_PLACEMENT: &str = "\
rnbqkbnr
pppppppp
________
________
________
________
PPPPPPPP
RNBQKBNR";

const STANDARD_PROMOTION: &str = "\
WWWWWWWW
________
________
________
________
________
________
bbbbbbbb";

const HOLE_PLACEMENT: &str = "\
rnbqkbnr
pppppppp
________
___XX___
___XX___
________
PPPPPPPP
RNBQKBNR";

const HOLE_PROMOTION: &str = "\
WWWWWWWW
________
________
___XX___
___XX___
________
________
bbbbbbbb";

const CLOSEUP_PLACEMENT: &str = "\
rnbqkbnr
pppppppp
________
________
________
PPPPPPPP
RNBQKBNR";

const CLOSEUP_PROMOTION: &str = "\
WWWWWWWW
________
________
________
________
________
bbbbbbbb";

const MARATHON_PLACEMENT: &str = "\
rnbqkbnr
pppppppp
________
________
________
________
________
PPPPPPPP
RNBQKBNR";

const MARATHON_PROMOTION: &str = "\
WWWWWWWW
________
________
________
________
________
________
________
bbbbbbbb";

const DOUBLE_PLACEMENT: &str = "\
rnbqkbnr
rnbqkbnr
pppppppp
________
________
________
________
PPPPPPPP
RNBQKBNR
RNBQKBNR";

const DOUBLE_PROMOTION: &str = "\
WWWWWWWW
________
________
________
________
________
________
________
________
bbbbbbbb";

const SECRET_PASSAGE_PLACEMENT: &str = "\
rnbqkbnr
pppppppp
________
XXX__XXX
XXX__XXX
________
PPPPPPPP
RNBQKBNR";

const SECRET_PASSAGE_PROMOTION: &str = "\
WWWWWWWW
________
________
XXX__XXX
XXX__XXX
________
________
bbbbbbbb";

/// Returns the built-in placement diagram for a layout name.
///
/// `custom` has no built-in diagram and yields the empty string.
pub fn placement(name: LayoutName) -> &'static str {
    match name {
        LayoutName::Standard => STANDARD_PLACEMENT,
        LayoutName::Hole => HOLE_PLACEMENT,
        LayoutName::Closeup => CLOSEUP_PLACEMENT,
        LayoutName::Marathon => MARATHON_PLACEMENT,
        LayoutName::Double => DOUBLE_PLACEMENT,
        LayoutName::SecretPassage => SECRET_PASSAGE_PLACEMENT,
        LayoutName::Custom => "",
    }
}

/// Returns the built-in promotion diagram for a layout name.
///
/// `custom` has no built-in diagram and yields the empty string.
pub fn promotion(name: LayoutName) -> &'static str {
    match name {
        LayoutName::Standard => STANDARD_PROMOTION,
        LayoutName::Hole => HOLE_PROMOTION,
        LayoutName::Closeup => CLOSEUP_PROMOTION,
        LayoutName::Marathon => MARATHON_PROMOTION,
        LayoutName::Double => DOUBLE_PROMOTION,
        LayoutName::SecretPassage => SECRET_PASSAGE_PROMOTION,
        LayoutName::Custom => "",
    }
}

/// Builds the initial placement mapping: every layout name, `custom` empty.
pub fn seed_placements() -> HashMap<LayoutName, String> {
    LayoutName::ALL
        .into_iter()
        .map(|name| (name, placement(name).to_string()))
        .collect()
}

/// Builds the initial promotion mapping: every layout name, `custom` empty.
pub fn seed_promotions() -> HashMap<LayoutName, String> {
    LayoutName::ALL
        .into_iter()
        .map(|name| (name, promotion(name).to_string()))
        .collect()
}
