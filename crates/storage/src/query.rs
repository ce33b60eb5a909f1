//! The order join and the row mapping for it.
//!
//! Both reports read the same join: every `paid` or `dispatched` order,
//! joined through its product to the catalog wine. Search narrows it with a
//! literal substring match on the lower-cased name or on the vintage text.

use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ValueRef};
use rusqlite::{Connection, Params, Row};
use types::{Amount, OrderLine, WineId};

/// All sold (`paid` or `dispatched`) order lines.
pub const SOLD_LINES_SQL: &str = "
    SELECT mw.id AS wine_id, mw.name, mw.vintage, co.quantity, co.total_amount
    FROM customer_order co
    JOIN wine_product wp ON co.wine_product_id = wp.id
    JOIN master_wine mw ON wp.master_wine_id = mw.id
    WHERE co.status IN ('paid', 'dispatched')";

/// Sold order lines whose wine name (lower-cased, `?1`) or vintage (`?2`)
/// contains the search text.
///
/// `instr` keeps the match literal: `%` and `_` in user input are plain
/// characters, and an empty needle matches every row.
pub const SEARCH_LINES_SQL: &str = "
    SELECT mw.id AS wine_id, mw.name, mw.vintage, co.quantity, co.total_amount
    FROM customer_order co
    JOIN wine_product wp ON co.wine_product_id = wp.id
    JOIN master_wine mw ON wp.master_wine_id = mw.id
    WHERE co.status IN ('paid', 'dispatched')
      AND (instr(LOWER(mw.name), ?1) > 0 OR instr(CAST(mw.vintage AS TEXT), ?2) > 0)";

/// Search parameters for [`SEARCH_LINES_SQL`].
///
/// SQLite's `LOWER` only folds ASCII, so the needle is folded the same way.
pub fn search_params(query: &str) -> (String, String) {
    (query.to_ascii_lowercase(), query.to_string())
}

/// `total_amount` column, REAL or INTEGER, read as an exact decimal.
struct SqlAmount(Amount);

impl FromSql for SqlAmount {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        let v = f64::column_result(value)?;
        Amount::from_f64(v)
            .map(SqlAmount)
            .map_err(|e| FromSqlError::Other(Box::new(e)))
    }
}

fn order_line(row: &Row<'_>) -> rusqlite::Result<OrderLine> {
    let SqlAmount(total_amount) = row.get("total_amount")?;
    Ok(OrderLine {
        wine_id: WineId(row.get("wine_id")?),
        name: row.get("name")?,
        vintage: row.get("vintage")?,
        quantity: row.get("quantity")?,
        total_amount,
    })
}

/// Run one of the order-line queries on a connection.
pub fn fetch_lines<P: Params>(
    conn: &Connection,
    sql: &str,
    params: P,
) -> rusqlite::Result<Vec<OrderLine>> {
    let mut stmt = conn.prepare_cached(sql)?;
    let rows = stmt.query_map(params, order_line)?;
    rows.collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::init_schema;

    fn seeded() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        init_schema(&conn).unwrap();
        conn.execute_batch(
            "INSERT INTO master_wine (id, name, vintage) VALUES
                (1, 'Merlot', 2018), (2, 'Syrah', 2020), (3, 'Cabernet Sauvignon', 2015),
                (4, '100% Grenache', 2021);
             INSERT INTO wine_product (id, master_wine_id) VALUES
                (10, 1), (11, 1), (20, 2), (30, 3), (40, 4);
             INSERT INTO customer_order (wine_product_id, quantity, total_amount, status) VALUES
                (10, 2, 40.0, 'paid'),
                (11, 1, 20.0, 'dispatched'),
                (20, 5, 100.0, 'paid'),
                (20, 9, 180.0, 'cancelled'),
                (30, 1, 75.5, 'pending'),
                (30, 3, 226.5, 'dispatched'),
                (40, 1, 15, 'paid');",
        )
        .unwrap();
        conn
    }

    fn search(conn: &Connection, query: &str) -> Vec<OrderLine> {
        let (name, vintage) = search_params(query);
        fetch_lines(conn, SEARCH_LINES_SQL, [name, vintage]).unwrap()
    }

    #[test]
    fn test_queries_share_status_filter() {
        let filter = "co.status IN ('paid', 'dispatched')";
        assert!(SOLD_LINES_SQL.contains(filter));
        assert!(SEARCH_LINES_SQL.contains(filter));
    }

    #[test]
    fn test_sold_lines_apply_status_filter() {
        let conn = seeded();
        let lines = fetch_lines(&conn, SOLD_LINES_SQL, []).unwrap();
        assert_eq!(lines.len(), 5);
        assert!(!lines.iter().any(|l| l.quantity == 9));
        assert!(!lines.iter().any(|l| l.total_amount == Amount::new(755, 1)));
    }

    #[test]
    fn test_products_fold_into_catalog_wine() {
        let conn = seeded();
        let lines = fetch_lines(&conn, SOLD_LINES_SQL, []).unwrap();
        let merlot: Vec<_> = lines.iter().filter(|l| l.wine_id == WineId(1)).collect();
        assert_eq!(merlot.len(), 2);
        assert!(merlot.iter().all(|l| l.name == "Merlot" && l.vintage == 2018));
    }

    #[test]
    fn test_integer_amount_column_reads() {
        let conn = seeded();
        let lines = search(&conn, "grenache");
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].total_amount, Amount::new(15, 0));
    }

    #[test]
    fn test_amounts_read_without_rounding() {
        let conn = seeded();
        conn.execute_batch(
            "INSERT INTO master_wine (id, name, vintage) VALUES (5, 'Gamay', 2022);
             INSERT INTO wine_product (id, master_wine_id) VALUES (50, 5);
             INSERT INTO customer_order (wine_product_id, quantity, total_amount, status) VALUES
                (50, 1, 0.00004, 'paid'),
                (50, 1, 12.34567, 'paid');",
        )
        .unwrap();

        let amounts: Vec<_> = search(&conn, "gamay").iter().map(|l| l.total_amount).collect();
        assert!(amounts.contains(&Amount::new(4, 5)));
        assert!(amounts.contains(&Amount::new(1_234_567, 5)));
    }

    #[test]
    fn test_search_name_case_insensitive() {
        let conn = seeded();
        let lines = search(&conn, "cab");
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].name, "Cabernet Sauvignon");

        assert_eq!(search(&conn, "MERL").len(), 2);
    }

    #[test]
    fn test_search_vintage_substring() {
        let conn = seeded();
        let lines = search(&conn, "202");
        let ids: Vec<_> = lines.iter().map(|l| l.wine_id.raw()).collect();
        assert!(ids.contains(&2));
        assert!(ids.contains(&4));
        assert!(!ids.contains(&1));
    }

    #[test]
    fn test_search_empty_matches_all_sold() {
        let conn = seeded();
        assert_eq!(search(&conn, "").len(), 5);
    }

    #[test]
    fn test_search_wildcards_are_literal() {
        let conn = seeded();
        assert_eq!(search(&conn, "%").len(), 1);
        assert!(search(&conn, "_").is_empty());
    }

    #[test]
    fn test_search_params_fold_ascii_only() {
        let (name, vintage) = search_params("CabÉ");
        assert_eq!(name, "cabÉ");
        assert_eq!(vintage, "CabÉ");
    }
}
