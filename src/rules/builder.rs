//! Assembling a match from catalog data.

use crate::cards::{CardCatalog, DeckLibrary, DeckSpec};
use crate::core::{MatchConfig, SetupError, SideId, SideMap};

use super::engine::Match;

/// Builder that resolves deck specs against a catalog.
///
/// ```
/// use scale_duel::cards::{CardCatalog, CardDefinition, CardId, DeckSpec};
/// use scale_duel::rules::MatchBuilder;
///
/// let catalog = CardCatalog::from_definitions([
///     CardDefinition::new(CardId::new(1), "Squire", 1, 1, 2),
///     CardDefinition::new(CardId::new(2), "Knight", 3, 2, 3),
/// ])
/// .unwrap();
///
/// let game = MatchBuilder::new(&catalog)
///     .player_deck(DeckSpec::new(vec![CardId::new(1), CardId::new(2)]))
///     .enemy_deck(DeckSpec::new(vec![CardId::new(2)]))
///     .seed(42)
///     .build()
///     .unwrap();
///
/// assert_eq!(game.turn_number(), 1);
/// ```
#[derive(Clone, Debug)]
pub struct MatchBuilder<'a> {
    catalog: &'a CardCatalog,
    config: MatchConfig,
    decks: SideMap<DeckSpec>,
    seed: u64,
}

impl<'a> MatchBuilder<'a> {
    /// Default config, empty decks, seed 0.
    #[must_use]
    pub fn new(catalog: &'a CardCatalog) -> Self {
        Self {
            catalog,
            config: MatchConfig::default(),
            decks: SideMap::new(|_| DeckSpec::empty()),
            seed: 0,
        }
    }

    #[must_use]
    pub fn config(mut self, config: MatchConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use]
    pub fn player_deck(mut self, deck: DeckSpec) -> Self {
        self.decks[SideId::Player] = deck;
        self
    }

    #[must_use]
    pub fn enemy_deck(mut self, deck: DeckSpec) -> Self {
        self.decks[SideId::Enemy] = deck;
        self
    }

    /// Take the player deck and opponent `opponent_index` from a library.
    ///
    /// Missing entries fall back to empty decks.
    #[must_use]
    pub fn library(self, library: &DeckLibrary, opponent_index: usize) -> Self {
        self.player_deck(library.player_deck())
            .enemy_deck(library.opponent(opponent_index))
    }

    #[must_use]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Validate the config, resolve both decks and deal the opening.
    pub fn build(self) -> Result<Match, SetupError> {
        let player = self.decks[SideId::Player].resolve(self.catalog)?;
        let enemy = self.decks[SideId::Enemy].resolve(self.catalog)?;
        let game = Match::new(self.config, SideMap::from_pair(player, enemy), self.seed)?;
        Ok(game)
    }
}
