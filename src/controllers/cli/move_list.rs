use crate::controllers::cli::errors::MoveParseError;
use crate::core::puzzle::RodId;

/// Parses whitespace separated moves such as `AC ab 21`.
///
/// Each move is two rods, given as a letter `A`..`C` or an index `0`..`2`.
pub fn parse_moves(input: &str) -> Result<Vec<(RodId, RodId)>, MoveParseError> {
    input.split_whitespace().map(parse_move).collect()
}

fn parse_move(token: &str) -> Result<(RodId, RodId), MoveParseError> {
    let mut chars = token.chars();

    match (chars.next(), chars.next(), chars.next()) {
        (Some(from), Some(to), None) => Ok((parse_rod(token, from)?, parse_rod(token, to)?)),
        _ => Err(MoveParseError::Malformed {
            token: token.to_owned(),
        }),
    }
}

fn parse_rod(token: &str, rod: char) -> Result<RodId, MoveParseError> {
    if let Some(index) = rod.to_digit(10) {
        return RodId::try_from(index as usize).map_err(|source| MoveParseError::OutOfRange {
            token: token.to_owned(),
            source,
        });
    }

    RodId::ALL
        .into_iter()
        .find(|id| id.label() == rod.to_ascii_uppercase())
        .ok_or_else(|| MoveParseError::UnknownRod {
            token: token.to_owned(),
            rod,
        })
}
