use crate::address;
use crate::db::connection::Database;
use crate::domain::record::ResultRecord;
use crate::errors::StoreError;
use rusqlite::{params, Connection, OptionalExtension};

/// One utility ledger row as stored. The upstream export leaves blanks where
/// a reading is missing, so every amount is a string and "" means absent.
#[derive(Debug, PartialEq)]
pub struct BillingRow {
    pub high: String,
    pub low: String,
    pub ave: String,
}

/// Exact-equality lookup on the cooked street key. No fuzzy or partial
/// matching; the first row wins.
pub fn find_bills_by_street(
    conn: &Connection,
    street: &str,
) -> Result<Option<BillingRow>, StoreError> {
    conn.query_row(
        r#"
        SELECT high_bill_amount, low_bill_amount, ave_bill_amount
        FROM utility_bills
        WHERE street = ?1
        ORDER BY id
        LIMIT 1
        "#,
        params![street],
        |row| {
            Ok(BillingRow {
                high: row.get(0)?,
                low: row.get(1)?,
                ave: row.get(2)?,
            })
        },
    )
    .optional()
    .map_err(StoreError::from)
}

/// Two-phase resolution of the utility bill figures.
///
/// The ledger's key format only sometimes folds spelled-out ordinals, so a
/// literal lookup runs first; only on a miss is the more aggressive ordinal
/// fold applied and the lookup retried once. The folded key replaces the
/// record's cooked address either way, since the valuation call downstream
/// uses the same string the ledger would have matched.
pub fn resolve_utility_bills(db: &Database, record: &mut ResultRecord) -> Result<(), StoreError> {
    db.with_conn(|conn| {
        let mut row = find_bills_by_street(conn, &record.cooked_address)?;

        if row.is_none() {
            record.cooked_address = address::fold_ordinals(&record.cooked_address);
            row = find_bills_by_street(conn, &record.cooked_address)?;
        }

        if let Some(bills) = row {
            apply_bill_amount(&bills.high, &mut record.high);
            apply_bill_amount(&bills.low, &mut record.low);
            apply_bill_amount(&bills.ave, &mut record.avg);
        }

        Ok(())
    })
}

// Blank cells stay at the sentinel, and so does anything that fails to parse
// as a number; garbage must never leak into downstream arithmetic.
fn apply_bill_amount(stored: &str, field: &mut f64) {
    if stored.is_empty() {
        return;
    }
    if let Ok(amount) = stored.parse::<f64>() {
        *field = amount;
    }
}

/// Seeds one ledger row. Used by tests and by operators loading the export.
pub fn insert_bill(
    conn: &Connection,
    street: &str,
    high: &str,
    low: &str,
    ave: &str,
) -> Result<(), StoreError> {
    conn.execute(
        r#"
        INSERT INTO utility_bills (street, high_bill_amount, low_bill_amount, ave_bill_amount)
        VALUES (?1, ?2, ?3, ?4)
        "#,
        params![street, high, low, ave],
    )?;
    Ok(())
}
