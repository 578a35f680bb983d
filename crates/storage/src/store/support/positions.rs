#![forbid(unsafe_code)]

//! Sibling ordering.
//!
//! Rows are ordered by `(position, id)`. New rows and moved rows are appended
//! at `max(position) + 1`; reordering swaps positions with the adjacent
//! sibling. Positions are never compacted on delete, so gaps are normal.

use super::super::{Effect, StoreError};
use rusqlite::{OptionalExtension, Transaction, params_from_iter};
use st_core::ids::{FolderId, SpaceId};
use st_core::model::{ContainerRef, Direction};

/// Rows that share one ordering.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(in crate::store) enum SiblingGroup {
    FoldersOf(SpaceId),
    ListsOf(ContainerRef),
}

impl SiblingGroup {
    fn table(self) -> &'static str {
        match self {
            Self::FoldersOf(_) => "folders",
            Self::ListsOf(_) => "lists",
        }
    }

    fn filter(self) -> &'static str {
        match self {
            Self::FoldersOf(_) => "space_id = ?",
            // `IS` so that two Space-direct lists (both NULL) compare equal.
            Self::ListsOf(_) => "space_id = ? AND folder_id IS ?",
        }
    }

    fn filter_params(self) -> Vec<Option<i64>> {
        match self {
            Self::FoldersOf(space_id) => vec![Some(space_id.get())],
            Self::ListsOf(parent) => vec![
                Some(parent.space_id().get()),
                parent.folder_id().map(FolderId::get),
            ],
        }
    }
}

pub(in crate::store) fn next_position_tx(
    tx: &Transaction<'_>,
    group: SiblingGroup,
) -> Result<i64, StoreError> {
    let sql = format!(
        "SELECT COALESCE(MAX(position), 0) + 1 FROM {} WHERE {}",
        group.table(),
        group.filter()
    );
    Ok(tx.query_row(&sql, params_from_iter(group.filter_params()), |row| {
        row.get::<_, i64>(0)
    })?)
}

/// Swaps `row_id` with its neighbour in `direction`. Returns `Unchanged` when
/// the row is already first (`Up`) or last (`Down`) in its group.
pub(in crate::store) fn reorder_tx(
    tx: &Transaction<'_>,
    group: SiblingGroup,
    row_id: i64,
    position: i64,
    direction: Direction,
) -> Result<Effect, StoreError> {
    let Some((neighbour_id, neighbour_position)) =
        neighbour_tx(tx, group, row_id, position, direction)?
    else {
        return Ok(Effect::Unchanged);
    };

    let (position, neighbour_position) = if neighbour_position == position {
        renumber_tx(tx, group)?;
        (
            position_of_tx(tx, group, row_id)?,
            position_of_tx(tx, group, neighbour_id)?,
        )
    } else {
        (position, neighbour_position)
    };

    let sql = format!("UPDATE {} SET position = ?1 WHERE id = ?2", group.table());
    tx.execute(&sql, rusqlite::params![neighbour_position, row_id])?;
    tx.execute(&sql, rusqlite::params![position, neighbour_id])?;

    Ok(Effect::Applied)
}

fn neighbour_tx(
    tx: &Transaction<'_>,
    group: SiblingGroup,
    row_id: i64,
    position: i64,
    direction: Direction,
) -> Result<Option<(i64, i64)>, StoreError> {
    let (comparison, order) = match direction {
        Direction::Up => (
            "(position < ? OR (position = ? AND id < ?))",
            "position DESC, id DESC",
        ),
        Direction::Down => (
            "(position > ? OR (position = ? AND id > ?))",
            "position ASC, id ASC",
        ),
    };
    let sql = format!(
        "SELECT id, position FROM {} WHERE {} AND {comparison} ORDER BY {order} LIMIT 1",
        group.table(),
        group.filter()
    );

    let mut values = group.filter_params();
    values.extend([Some(position), Some(position), Some(row_id)]);

    Ok(tx
        .query_row(&sql, params_from_iter(values), |row| {
            Ok((row.get::<_, i64>(0)?, row.get::<_, i64>(1)?))
        })
        .optional()?)
}

/// Rewrites the group's positions as 1..n in current order. Only needed when
/// a tie would make a swap invisible.
fn renumber_tx(tx: &Transaction<'_>, group: SiblingGroup) -> Result<(), StoreError> {
    let select = format!(
        "SELECT id FROM {} WHERE {} ORDER BY position ASC, id ASC",
        group.table(),
        group.filter()
    );
    let ids = {
        let mut stmt = tx.prepare(&select)?;
        let rows = stmt.query_map(params_from_iter(group.filter_params()), |row| {
            row.get::<_, i64>(0)
        })?;
        rows.collect::<Result<Vec<_>, _>>()?
    };

    let update = format!("UPDATE {} SET position = ?1 WHERE id = ?2", group.table());
    for (index, id) in ids.into_iter().enumerate() {
        let position = i64::try_from(index)
            .map_err(|_| StoreError::InvalidInput("sibling group too large"))?
            + 1;
        tx.execute(&update, rusqlite::params![position, id])?;
    }
    Ok(())
}

fn position_of_tx(
    tx: &Transaction<'_>,
    group: SiblingGroup,
    row_id: i64,
) -> Result<i64, StoreError> {
    let sql = format!("SELECT position FROM {} WHERE id = ?1", group.table());
    Ok(tx.query_row(&sql, rusqlite::params![row_id], |row| row.get::<_, i64>(0))?)
}
