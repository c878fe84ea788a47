//! The board: an ordered, circular track of squares.
//!
//! `Board` validates its squares once on construction and then only offers
//! read access, so a single instance can be shared by every game of a batch.

use rustc_hash::FxHashSet;

use super::square::{Square, SquareKind};
use crate::core::ConfigError;

/// Circular track of squares.
///
/// ```
/// use party_monopoly::board::{Board, Square};
///
/// let board = Board::new(vec![
///     Square::new(0, "Go"),
///     Square::property(0, "Disco", "red", 3),
///     Square::property(0, "Karaoke", "red", 3),
/// ])
/// .unwrap();
///
/// assert_eq!(board.len(), 3);
/// assert_eq!(board.get(2).index, 2);
/// assert_eq!(board.colour_squares("red").count(), 2);
/// ```
#[derive(Clone, Debug)]
pub struct Board {
    squares: Vec<Square>,
    jail: Option<usize>,
}

impl Board {
    /// Build a board, assigning each square its list position as index.
    ///
    /// Fails if the board is empty, a property has no cost or a negative
    /// one, two properties share a name, or there is a "Go to Jail" square
    /// but no "Jail".
    pub fn new(mut squares: Vec<Square>) -> Result<Self, ConfigError> {
        if squares.is_empty() {
            return Err(ConfigError::InvalidBoard("board has no squares".into()));
        }

        let mut property_names = FxHashSet::default();
        for (index, square) in squares.iter_mut().enumerate() {
            square.index = index;

            if !square.kind().is_property() {
                continue;
            }
            match square.cost {
                None => {
                    return Err(ConfigError::InvalidBoard(format!(
                        "property `{}` has no cost",
                        square.name
                    )))
                }
                Some(cost) if cost < 0 => {
                    return Err(ConfigError::InvalidBoard(format!(
                        "property `{}` has negative cost {cost}",
                        square.name
                    )))
                }
                Some(_) => {}
            }
            if !property_names.insert(square.name.clone()) {
                return Err(ConfigError::InvalidBoard(format!(
                    "property `{}` appears more than once",
                    square.name
                )));
            }
        }

        let jail = squares.iter().position(|sq| sq.kind() == SquareKind::Jail);
        let has_go_to_jail = squares.iter().any(|sq| sq.kind() == SquareKind::GoToJail);
        if has_go_to_jail && jail.is_none() {
            return Err(ConfigError::InvalidBoard(
                "board has a `Go to Jail` square but no `Jail`".into(),
            ));
        }

        Ok(Self { squares, jail })
    }

    /// Parse a JSON square table.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let squares: Vec<Square> = serde_json::from_str(json)?;
        Self::new(squares)
    }

    /// Track length.
    #[must_use]
    pub fn len(&self) -> usize {
        self.squares.len()
    }

    /// Always false: empty boards are rejected on construction.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.squares.is_empty()
    }

    /// Square at `index`.
    ///
    /// Panics if `index` is off the track.
    #[must_use]
    pub fn get(&self, index: usize) -> &Square {
        &self.squares[index]
    }

    /// All squares in board order.
    pub fn squares(&self) -> &[Square] {
        &self.squares
    }

    /// Index of the first "Jail" square.
    #[must_use]
    pub fn jail_index(&self) -> Option<usize> {
        self.jail
    }

    /// Find a square by name.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&Square> {
        self.squares.iter().find(|sq| sq.name == name)
    }

    /// Squares of a colour group, in board order.
    pub fn colour_squares<'a>(&'a self, colour: &'a str) -> impl Iterator<Item = &'a Square> + 'a {
        self.squares.iter().filter(move |sq| sq.has_colour(colour))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_board() -> Vec<Square> {
        vec![
            Square::new(0, "Go"),
            Square::property(0, "Disco", "red", 3),
            Square::new(0, "Jail"),
            Square::property(0, "Karaoke", "red", 3),
            Square::new(0, "Go to Jail"),
        ]
    }

    #[test]
    fn test_indices_follow_list_order() {
        let board = Board::new(small_board()).unwrap();

        for (i, square) in board.squares().iter().enumerate() {
            assert_eq!(square.index, i);
        }
        assert_eq!(board.jail_index(), Some(2));
    }

    #[test]
    fn test_find_and_colour_lookup() {
        let board = Board::new(small_board()).unwrap();

        assert_eq!(board.find("Karaoke").map(|sq| sq.index), Some(3));
        assert!(board.find("Ball Pit").is_none());

        let reds: Vec<_> = board.colour_squares("red").map(|sq| sq.name.as_str()).collect();
        assert_eq!(reds, vec!["Disco", "Karaoke"]);
        assert_eq!(board.colour_squares("green").count(), 0);
    }

    #[test]
    fn test_empty_board_rejected() {
        assert!(matches!(Board::new(Vec::new()), Err(ConfigError::InvalidBoard(_))));
    }

    #[test]
    fn test_property_without_cost_rejected() {
        let mut squares = small_board();
        squares[1].cost = None;
        assert!(matches!(Board::new(squares), Err(ConfigError::InvalidBoard(_))));
    }

    #[test]
    fn test_negative_cost_rejected() {
        let mut squares = small_board();
        squares[3].cost = Some(-5);
        let err = Board::new(squares).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidBoard(msg) if msg.contains("Karaoke")));

        let mut squares = small_board();
        squares[3].cost = Some(0);
        assert!(Board::new(squares).is_ok());
    }

    #[test]
    fn test_duplicate_property_rejected() {
        let mut squares = small_board();
        squares[3].name = "Disco".into();
        assert!(matches!(Board::new(squares), Err(ConfigError::InvalidBoard(_))));
    }

    #[test]
    fn test_repeated_special_squares_allowed() {
        let squares = vec![Square::new(0, "Go"), Square::new(0, "Chance"), Square::new(0, "Chance")];
        assert_eq!(Board::new(squares).unwrap().len(), 3);
    }

    #[test]
    fn test_go_to_jail_requires_jail() {
        let squares = vec![Square::new(0, "Go"), Square::new(0, "Go to Jail")];
        assert!(matches!(Board::new(squares), Err(ConfigError::InvalidBoard(_))));
    }
}
