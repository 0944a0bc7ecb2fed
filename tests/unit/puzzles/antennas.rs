//! Tests for antinode projection

#[cfg(test)]
mod tests {
    use latticewalk::io::input::parse_char_lattice;
    use latticewalk::puzzles::antennas::{Rule, antinodes, frequencies};
    use latticewalk::spatial::Coordinate;

    const CITY: &str = "............\n........0...\n.....0......\n.......0....\n....0.......\n\
                        ......A.....\n............\n............\n........A...\n.........A..\n\
                        ............\n............";

    // Tests the reference city for both rules
    // Verified by only projecting beyond the first antenna
    #[test]
    fn test_reference_city() {
        let lattice = parse_char_lattice(CITY).unwrap();
        assert_eq!(antinodes(&lattice, Rule::Pair).len(), 14);
        assert_eq!(antinodes(&lattice, Rule::Harmonics).len(), 34);
    }

    // Tests a single pair projects one antinode beyond each antenna
    // Verified by projecting at half the spacing
    #[test]
    fn test_single_pair() {
        let lattice = parse_char_lattice(
            "..........\n...a......\n..........\n....a.....\n..........\n\
             ..........\n..........\n..........\n..........\n..........",
        )
        .unwrap();
        let found = antinodes(&lattice, Rule::Pair);
        assert_eq!(
            found.into_iter().collect::<Vec<_>>(),
            vec![Coordinate::new(5, 5)]
        );
    }

    // Tests harmonics include the antennas themselves
    // Verified by starting the harmonic walk one step out
    #[test]
    fn test_harmonics_include_antennas() {
        let lattice = parse_char_lattice("a.a").unwrap();
        assert!(antinodes(&lattice, Rule::Pair).is_empty());
        assert_eq!(antinodes(&lattice, Rule::Harmonics).len(), 2);
    }

    // Tests frequencies group antennas by glyph and skip empty cells
    // Verified by including '.' as a frequency
    #[test]
    fn test_frequencies() {
        let lattice = parse_char_lattice("a.B\n.a.").unwrap();
        let groups = frequencies(&lattice);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[&'a'].len(), 2);
        assert_eq!(groups[&'B'], vec![Coordinate::new(0, 2)]);
    }
}
