use cube3::{
    Amount, Color, Configuration, Face, FaceGrids, Move, MoveSequence, format,
    generate_scramble_with, parse,
};
use itertools::Itertools;

fn scrambled(seed: u64, length: usize) -> Configuration {
    let mut configuration = Configuration::solved();
    configuration.apply_all(&generate_scramble_with(
        &mut fastrand::Rng::with_seed(seed),
        length,
    ));
    configuration
}

#[test_log::test]
fn test_four_quarter_turns_are_identity() {
    for seed in 0..5 {
        let start = scrambled(seed, 15);
        for face in Face::ALL {
            let mut configuration = start;
            for _ in 0..4 {
                configuration.apply(Move::new(face, Amount::Clockwise));
            }
            assert_eq!(configuration, start, "{face}");
        }
    }
}

#[test_log::test]
fn test_inverse_undoes_move() {
    let start = scrambled(11, 30);
    for m in Move::ALL {
        assert_eq!(start.applied(m).applied(m.inverse()), start, "{m}");
    }
}

#[test_log::test]
fn test_amounts_agree() {
    let start = scrambled(3, 12);
    for face in Face::ALL {
        let quarter = Move::new(face, Amount::Clockwise);
        let twice = start.applied(quarter).applied(quarter);
        assert_eq!(start.applied(Move::new(face, Amount::Double)), twice);
        assert_eq!(
            start.applied(Move::new(face, Amount::CounterClockwise)),
            twice.applied(quarter)
        );
    }
}

#[test_log::test]
fn test_colors_are_conserved() {
    let mut rng = fastrand::Rng::with_seed(5);
    let mut configuration = Configuration::solved();
    for m in generate_scramble_with(&mut rng, 100) {
        configuration.apply(m);
        assert_eq!(configuration.color_counts(), [9; 6]);
        for face in Face::ALL {
            assert_eq!(configuration.center(face), Color::of_face(face));
        }
    }
}

#[test_log::test]
fn test_applied_leaves_input_alone() {
    let start = scrambled(8, 10);
    let copy = start;
    let turned = start.applied(Move::ALL[7]);
    assert_ne!(turned, start);
    assert_eq!(start, copy);
}

#[test_log::test]
fn test_sequence_then_inverse() {
    let sequence: MoveSequence = "R U R' U' F2 D L' B2".parse().unwrap();
    let mut configuration = scrambled(21, 20);
    let start = configuration;
    configuration.apply_all(&sequence);
    assert_ne!(configuration, start);
    configuration.apply_all(&sequence.inverse());
    assert_eq!(configuration, start);
}

#[test_log::test]
fn test_notation_round_trip() {
    for m in Move::ALL {
        assert_eq!(parse(&format(m)), Ok(m));
    }
    let notations = Face::ALL
        .iter()
        .cartesian_product(["", "'", "2"])
        .map(|(face, suffix)| format!("{face}{suffix}"))
        .collect_vec();
    assert_eq!(notations.len(), 18);
    for text in notations {
        assert_eq!(format(parse(&text).unwrap()), text);
    }
}

#[test_log::test]
fn test_face_grid_round_trip() {
    for configuration in [Configuration::solved(), scrambled(13, 25)] {
        let grids = FaceGrids::from(&configuration);
        assert_eq!(Configuration::from(&grids), configuration);
        for face in Face::ALL {
            assert_eq!(grids[face].as_flattened(), configuration.face(face));
        }
    }
}

#[test_log::test]
fn test_text_round_trip() {
    let configuration = scrambled(17, 25);
    let text = configuration.to_string();
    assert_eq!(text.parse::<Configuration>(), Ok(configuration));
}
