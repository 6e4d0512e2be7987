use cube3::{
    Color, Configuration, Corner, Edge, Face, LegalityError, generate_scramble_with, validate,
};

type Stickers = [[Color; 9]; 6];

fn solved_stickers() -> Stickers {
    *Configuration::solved().stickers()
}

fn set(stickers: &mut Stickers, (face, index): (Face, usize), color: Color) {
    stickers[face.index()][index] = color;
}

fn get(stickers: &Stickers, (face, index): (Face, usize)) -> Color {
    stickers[face.index()][index]
}

fn scrambled_stickers(seed: u64) -> Stickers {
    let mut configuration = Configuration::solved();
    configuration.apply_all(&generate_scramble_with(&mut fastrand::Rng::with_seed(seed), 25));
    *configuration.stickers()
}

#[test_log::test]
fn test_solved_is_legal() {
    assert_eq!(validate(&Configuration::solved()), Ok(()));
    assert!(Configuration::solved().is_legal());
}

#[test_log::test]
fn test_scrambles_are_legal() {
    let mut rng = fastrand::Rng::with_seed(99);
    for _ in 0..50 {
        let mut configuration = Configuration::solved();
        let length = rng.usize(..40);
        configuration.apply_all(&generate_scramble_with(&mut rng, length));
        assert_eq!(validate(&configuration), Ok(()));
    }
}

#[test_log::test]
fn test_over_count_is_named() {
    let mut stickers = solved_stickers();
    // Ten green stickers and eight white ones.
    set(&mut stickers, (Face::Up, 0), Color::Green);
    assert_eq!(
        validate(&Configuration::from_stickers(stickers)),
        Err(LegalityError::InvalidStickerCount {
            color: Color::Green,
            count: 10,
        })
    );
}

#[test_log::test]
fn test_shared_center() {
    let mut stickers = solved_stickers();
    // Keep every color at nine stickers while two centers match.
    set(&mut stickers, (Face::Up, 4), Color::Green);
    set(&mut stickers, (Face::Front, 0), Color::White);
    assert_eq!(
        validate(&Configuration::from_stickers(stickers)),
        Err(LegalityError::NonUniqueCenters)
    );
}

#[test_log::test]
fn test_shared_center_is_checked_before_orientation() {
    let mut stickers = scrambled_stickers(4);
    let up_center = get(&stickers, (Face::Up, 4));
    let front_center = get(&stickers, (Face::Front, 4));
    // Swap the up center with a front colored sticker that is not a center.
    let swap_with = Face::ALL
        .iter()
        .flat_map(|&face| [0, 1, 2, 3, 5, 6, 7, 8].map(|index| (face, index)))
        .find(|&position| get(&stickers, position) == front_center)
        .unwrap();
    set(&mut stickers, (Face::Up, 4), front_center);
    set(&mut stickers, swap_with, up_center);
    assert_eq!(
        validate(&Configuration::from_stickers(stickers)),
        Err(LegalityError::NonUniqueCenters)
    );
}

#[test_log::test]
fn test_twisted_corner() {
    let mut stickers = scrambled_stickers(6);
    let facelets = Corner::Dbl.facelets();
    let colors = facelets.map(|position| get(&stickers, position));
    for (k, &position) in facelets.iter().enumerate() {
        set(&mut stickers, position, colors[(k + 1) % 3]);
    }
    assert_eq!(
        validate(&Configuration::from_stickers(stickers)),
        Err(LegalityError::InvalidCornerOrientation)
    );
}

#[test_log::test]
fn test_flipped_edge() {
    let mut stickers = scrambled_stickers(7);
    let [a, b] = Edge::Fl.facelets();
    let (color_a, color_b) = (get(&stickers, a), get(&stickers, b));
    set(&mut stickers, a, color_b);
    set(&mut stickers, b, color_a);
    assert_eq!(
        validate(&Configuration::from_stickers(stickers)),
        Err(LegalityError::InvalidEdgeOrientation)
    );
}

#[test_log::test]
fn test_swapped_edges() {
    let mut stickers = scrambled_stickers(8);
    let (first, second) = (Edge::Ur.facelets(), Edge::Db.facelets());
    for (a, b) in first.into_iter().zip(second) {
        let (color_a, color_b) = (get(&stickers, a), get(&stickers, b));
        set(&mut stickers, a, color_b);
        set(&mut stickers, b, color_a);
    }
    assert_eq!(
        validate(&Configuration::from_stickers(stickers)),
        Err(LegalityError::InvalidPermutationParity)
    );
}

#[test_log::test]
fn test_swapped_corners() {
    let mut stickers = solved_stickers();
    let (first, second) = (Corner::Urf.facelets(), Corner::Ufl.facelets());
    for (a, b) in first.into_iter().zip(second) {
        let (color_a, color_b) = (get(&stickers, a), get(&stickers, b));
        set(&mut stickers, a, color_b);
        set(&mut stickers, b, color_a);
    }
    assert_eq!(
        validate(&Configuration::from_stickers(stickers)),
        Err(LegalityError::InvalidPermutationParity)
    );
}

#[test_log::test]
fn test_mirrored_corner() {
    let mut stickers = solved_stickers();
    let [_, b, c] = Corner::Drb.facelets();
    let (color_b, color_c) = (get(&stickers, b), get(&stickers, c));
    set(&mut stickers, b, color_c);
    set(&mut stickers, c, color_b);
    assert_eq!(
        validate(&Configuration::from_stickers(stickers)),
        Err(LegalityError::InvalidCornerPiece { slot: Corner::Drb })
    );
}
