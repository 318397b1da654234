/// Asserts that the board has exactly the given number of live cells.
#[macro_export]
macro_rules! assert_population {
    ($board:expr, $count:expr) => {
        assert_eq!(
            $board.population(),
            $count,
            "Population mismatch at generation {}",
            $board.generation()
        );
    };
}

/// Asserts that a coordinate-taking call failed with `OutOfRange`.
#[macro_export]
macro_rules! assert_out_of_range {
    ($result:expr) => {
        match $result {
            Err(e) => assert!(e.is_out_of_range(), "Expected OutOfRange, got {e:?}"),
            Ok(_) => panic!("Expected OutOfRange, call succeeded"),
        }
    };
}

/// Asserts that the board's live cells match the given set, ignoring order.
#[macro_export]
macro_rules! assert_live_cells {
    ($board:expr, $cells:expr) => {
        let mut expected: Vec<(u16, u16)> = $cells.to_vec();
        expected.sort_unstable();
        assert_eq!(
            common::live(&$board),
            expected,
            "Live cells mismatch at generation {}",
            $board.generation()
        );
    };
}
