//! Scroll-driven narrative, as pure functions.
//!
//! The guided tour advances with the page scroll position. The text and the
//! animation cue are both recomputed from that single scalar on every
//! change; the effect layer owns the actual DOM/rendering work.

pub const PHASE_INTRO_Y_POS: u32 = 300;
pub const PHASE_BASE_Y_POS: u32 = 735;
pub const PHASE_1_Y_POS: u32 = 800;
pub const PHASE_2_Y_POS: u32 = 1600;
pub const PHASE_3_Y_POS: u32 = 2200;
pub const PHASE_4_Y_POS: u32 = 3000;
pub const PHASE_5_Y_POS: u32 = 4000;

/// The tour phase at a given scroll position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Intro,
    Wrapping,
    Subdomains,
    FusesBothNames,
    CreateSubdomain,
    Finale,
}

impl Phase {
    pub fn at(scroll_position: u32) -> Phase {
        match scroll_position {
            p if p <= PHASE_1_Y_POS => Phase::Intro,
            p if p <= PHASE_2_Y_POS => Phase::Wrapping,
            p if p <= PHASE_3_Y_POS => Phase::Subdomains,
            p if p <= PHASE_4_Y_POS => Phase::FusesBothNames,
            p if p <= PHASE_5_Y_POS => Phase::CreateSubdomain,
            _ => Phase::Finale,
        }
    }
}

/// The narrative line for a scroll position; empty outside the phase
/// windows. Mirrors the original guide's text and its cascade ordering.
pub fn narrative_text(scroll_position: u32) -> &'static str {
    match Phase::at(scroll_position) {
        Phase::Wrapping => {
            "Your ERC-721 compliant ENS domain becomes an ERC-1155 compliant by wrapping!"
        }
        Phase::Subdomains => "You can now create new ERC-1155 compliant sub-domains.",
        Phase::FusesBothNames => "And use fuses on both names!",
        Phase::CreateSubdomain => "Lets create a subdomain as an NFT!",
        Phase::Intro | Phase::Finale => "",
    }
}

/// Whether the fuse-arrow animation runs: only past the final phase, once
/// the subdomain has been created.
pub fn arrows_active(scroll_position: u32) -> bool {
    scroll_position >= PHASE_5_Y_POS
}

/// Whether the "create subdomain" control glows for attention.
pub fn create_subdomain_highlighted(scroll_position: u32) -> bool {
    Phase::at(scroll_position) == Phase::CreateSubdomain
}
