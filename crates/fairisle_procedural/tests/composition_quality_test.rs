//! # Composition Quality Tests
//!
//! Every seed must produce a well-formed knit. Bands mirror around the
//! center and the rasterized grid is 100 rows whatever the nominal band
//! heights add up to. A snowflake or pine is picked at least once, at most
//! one kind of plus motif appears, and the palette-locked circle hash only
//! shows on Reserve Blue.

use fairisle_procedural::palette::{select_palette, RARE_INDEX};
use fairisle_procedural::{
    BandDefinition, CenterChoice, Grid, PatternKind, Seed, SeededRandom, Sequence, SequenceComposer,
    COLS, RESERVE_BLUE_INDEX, ROWS, TARGET_ROWS,
};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

fn compose(seed: Seed) -> (Sequence, usize) {
    let selection = select_palette(seed);
    let mut rng = SeededRandom::new(seed.pattern_seed());
    let sequence = SequenceComposer::default().compose(&mut rng, selection.index);
    (sequence, selection.index)
}

fn assert_well_formed(raw: u64, sequence: &Sequence, palette_index: usize) {
    let grid = Grid::rasterize(sequence);
    assert_eq!(grid.rows().count(), ROWS, "seed {raw}");
    assert_eq!(grid.to_bytes().len(), COLS * ROWS, "seed {raw}");

    assert!(sequence.is_mirror_symmetric(), "seed {raw}");
    let bottom: Vec<_> = sequence.bottom_half().iter().rev().copied().collect();
    assert_eq!(sequence.top_half(), bottom.as_slice(), "seed {raw}");

    let motif_picked = sequence.has_required_motif()
        || sequence.dropped_band().is_some_and(BandDefinition::is_required_motif);
    assert!(motif_picked, "seed {raw}: {}", sequence.describe());
    assert!(sequence.plus_patterns().len() <= 1, "seed {raw}: {}", sequence.describe());
    if sequence.contains("circle_hash") {
        assert_eq!(palette_index, RESERVE_BLUE_INDEX, "seed {raw}");
    }
}

/// Test: Structural invariants over a contiguous seed range.
#[test]
fn test_invariants_hold_for_first_seeds() {
    for raw in 0..20_000u64 {
        let (sequence, palette_index) = compose(Seed::new(raw));
        assert_well_formed(raw, &sequence, palette_index);
    }
}

/// Test: Structural invariants over sampled seeds across the whole range.
#[test]
fn test_invariants_hold_for_sampled_seeds() {
    let mut sampler = ChaCha8Rng::seed_from_u64(2_147_483_647);
    for _ in 0..5_000 {
        let raw: u64 = sampler.gen();
        let (sequence, palette_index) = compose(Seed::new(raw));
        assert_well_formed(raw, &sequence, palette_index);
    }
}

/// Test: Nominal heights overshoot and undershoot the grid, as issued.
#[test]
fn test_nominal_heights_are_not_pinned() {
    let mut over = 0;
    let mut under = 0;
    let mut motif_dropped = 0;
    for raw in 0..20_000u64 {
        let (sequence, _) = compose(Seed::new(raw));
        let total = sequence.total_height();
        if total > TARGET_ROWS {
            over += 1;
        } else if total < TARGET_ROWS {
            under += 1;
        }
        if !sequence.has_required_motif() {
            motif_dropped += 1;
        }
    }

    println!("Over: {over}, under: {under}, motif dropped: {motif_dropped} / 20000");
    assert!(over > 10_000, "over {over}");
    assert!(under > 1_000, "under {under}");
    assert_eq!(motif_dropped, 14);
}

/// Test: Rare palette rate is about 2.5% outside the grandfathered seeds.
#[test]
fn test_rarity_rate() {
    let total = 100_000u32 - 4;
    let rare = (4..100_000u32)
        .filter(|&raw| select_palette(Seed::from(raw)).is_rare)
        .count();

    #[allow(clippy::cast_precision_loss)]
    let rate = rare as f64 / f64::from(total);
    println!("Rare: {rare} / {total} ({:.3}%)", rate * 100.0);

    assert!((0.02..0.03).contains(&rate), "rarity rate {rate}");
}

/// Test: Palette indices stay in range and rare seeds report index 11.
#[test]
fn test_palette_bounds() {
    for raw in 0..10_000u32 {
        let selection = select_palette(Seed::from(raw));
        if selection.is_rare {
            assert_eq!(selection.index, RARE_INDEX);
        } else {
            assert!(selection.index < RARE_INDEX);
            assert_eq!(selection.index, raw as usize % 11);
        }
    }
}

/// Test: Circle hash shows up, and only on Reserve Blue.
#[test]
fn test_circle_hash_is_palette_locked() {
    let mut with_circle = 0;
    for raw in 0..20_000u64 {
        let (sequence, palette_index) = compose(Seed::new(raw));
        if sequence.contains("circle_hash") {
            assert_eq!(palette_index, RESERVE_BLUE_INDEX, "seed {raw}");
            with_circle += 1;
        }
    }
    println!("Seeds with circle_hash: {with_circle}");
    assert!(with_circle > 0);
    assert!(compose(Seed::new(127)).0.contains("circle_hash"));
}

/// Test: The giant snowflake wins the center roll regularly, never elsewhere.
#[test]
fn test_giant_snowflake_only_in_center() {
    let mut giants = 0;
    for raw in 0..20_000u64 {
        let (sequence, _) = compose(Seed::new(raw));
        for band in sequence.top_half() {
            assert_ne!(band.pattern(), PatternKind::SnowflakeGiant, "seed {raw}");
        }
        if sequence.center_choice() == CenterChoice::Giant {
            assert_eq!(sequence.center().pattern(), PatternKind::SnowflakeGiant);
            assert!(sequence.center().height >= 26);
            giants += 1;
        }
    }

    // the 20% roll rarely finds 26 free rows
    println!("Giant centers: {giants} / 20000");
    assert!(giants > 100 && giants < 600, "giant count {giants}");
}

/// Test: Grandfathered seeds render with the rare palette.
#[test]
fn test_grandfathered_seeds() {
    for raw in 0..=3u32 {
        assert!(select_palette(Seed::from(raw)).is_rare);
    }
    assert!(!select_palette(Seed::from(4u32)).is_rare);
}
