//! Tests for lattice construction, bounds handling and cell lookup

#[cfg(test)]
mod tests {
    use latticewalk::AlgorithmError;
    use latticewalk::spatial::{Coordinate, Lattice};

    fn sample() -> Lattice<u8> {
        Lattice::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6]]).unwrap()
    }

    // Tests dimensions of a well-formed lattice
    // Verified by swapping rows and cols in dimensions()
    #[test]
    fn test_dimensions() {
        let lattice = sample();
        assert_eq!(lattice.rows(), 2);
        assert_eq!(lattice.cols(), 3);
        assert_eq!(lattice.dimensions(), (2, 3));
        assert_eq!(lattice.len(), 6);
        assert!(!lattice.is_empty());
    }

    // Tests ragged rows are rejected at construction
    // Verified by skipping the row length check
    #[test]
    fn test_ragged_rows_rejected() {
        let result = Lattice::from_rows(vec![vec!['a', 'b'], vec!['c']]);
        match result {
            Err(AlgorithmError::RaggedLattice {
                row,
                expected,
                found,
            }) => {
                assert_eq!(row, 1);
                assert_eq!(expected, 2);
                assert_eq!(found, 1);
            }
            other => unreachable!("Expected RaggedLattice, got {other:?}"),
        }
    }

    // Tests empty row lists give an empty lattice rather than an error
    // Verified by returning an error for zero rows
    #[test]
    fn test_empty_lattice() {
        let lattice: Lattice<u8> = Lattice::from_rows(Vec::new()).unwrap();
        assert!(lattice.is_empty());
        assert_eq!(lattice.dimensions(), (0, 0));
        assert!(!lattice.contains(Coordinate::new(0, 0)));

        let no_columns: Lattice<u8> = Lattice::from_rows(vec![Vec::new(), Vec::new()]).unwrap();
        assert!(no_columns.is_empty());
    }

    // Tests out-of-bounds reads return the sentinel
    // Verified by clamping coordinates instead of rejecting them
    #[test]
    fn test_get_out_of_bounds_is_none() {
        let lattice = sample();
        assert_eq!(lattice.get(Coordinate::new(0, 0)), Some(&1));
        assert_eq!(lattice.get(Coordinate::new(1, 2)), Some(&6));
        assert_eq!(lattice.get(Coordinate::new(-1, 0)), None);
        assert_eq!(lattice.get(Coordinate::new(0, -1)), None);
        assert_eq!(lattice.get(Coordinate::new(2, 0)), None);
        assert_eq!(lattice.get(Coordinate::new(0, 3)), None);
    }

    // Tests array indices are produced only for in-bounds coordinates
    // Verified by converting negative components with a wrapping cast
    #[test]
    fn test_index_of() {
        let lattice = sample();
        assert_eq!(lattice.index_of(Coordinate::new(1, 2)), Some([1, 2]));
        assert_eq!(lattice.index_of(Coordinate::new(-1, 2)), None);
        assert_eq!(lattice.index_of(Coordinate::new(2, 2)), None);
    }

    // Tests mapping keeps the shape and transforms each cell
    // Verified by transposing the mapped array
    #[test]
    fn test_map() {
        let lattice = sample();
        let doubled = lattice.map(|value| value * 2);
        assert_eq!(doubled.dimensions(), (2, 3));
        assert_eq!(doubled.get(Coordinate::new(1, 2)), Some(&12));
    }

    // Tests neighbour iteration drops out-of-bounds cells
    // Verified by removing the bounds filter
    #[test]
    fn test_neighbors_clipped_at_border() {
        let lattice = sample();
        let corner: Vec<Coordinate> = lattice.neighbors(Coordinate::new(0, 0)).collect();
        assert_eq!(corner.len(), 2);
        assert!(corner.contains(&Coordinate::new(0, 1)));
        assert!(corner.contains(&Coordinate::new(1, 0)));

        let middle: Vec<Coordinate> = lattice.neighbors(Coordinate::new(0, 1)).collect();
        assert_eq!(middle.len(), 3);
    }

    // Tests value search returns row-major positions
    // Verified by iterating columns first
    #[test]
    fn test_find_all_and_positions() {
        let lattice = Lattice::from_rows(vec![vec![0, 1], vec![0, 0]]).unwrap();
        assert_eq!(
            lattice.find_all(&0),
            vec![
                Coordinate::new(0, 0),
                Coordinate::new(1, 0),
                Coordinate::new(1, 1)
            ]
        );
        assert_eq!(lattice.positions(|value| *value > 0), vec![Coordinate::new(0, 1)]);
        assert_eq!(lattice.cells().count(), 4);
    }
}
