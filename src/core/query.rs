//! Statement search and category filter
//!
//! Pure, read-only views over a transaction slice. Results keep the input
//! order, so a newest-first history stays newest-first.

use crate::types::{search_form, Category, Transaction};

/// Transactions matching a search term and a category
///
/// A transaction matches when both hold:
/// - `category` is [`Category::ALL`] or equals the transaction's category
/// - `search` is empty, is a case-insensitive substring of the name, or is a
///   substring of the amount's decimal form (see [`search_form`])
///
/// The amount match is textual: `"5"` matches any amount with a 5 anywhere,
/// fractional digits included.
pub fn filter<'a>(
    transactions: &'a [Transaction],
    search: &str,
    category: &str,
) -> Vec<&'a Transaction> {
    let needle = search.to_lowercase();

    transactions
        .iter()
        .filter(|tx| category == Category::ALL || tx.category == category)
        .filter(|tx| {
            search.is_empty()
                || tx.name.to_lowercase().contains(&needle)
                || search_form(tx.amount).contains(search)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::demo_transactions;
    use rstest::rstest;

    #[test]
    fn test_empty_search_all_categories_returns_everything_in_order() {
        let transactions = demo_transactions();

        let result = filter(&transactions, "", Category::ALL);

        let expected: Vec<&Transaction> = transactions.iter().collect();
        assert_eq!(result, expected);
    }

    #[test]
    fn test_name_search_is_case_insensitive() {
        let transactions = demo_transactions();

        let result = filter(&transactions, "netflix", Category::ALL);

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "Netflix");
    }

    #[test]
    fn test_category_filter_keeps_only_that_category() {
        let transactions = demo_transactions();

        let result = filter(&transactions, "", Category::FOOD);

        let ids: Vec<u64> = result.iter().map(|tx| tx.id).collect();
        assert_eq!(ids, vec![1, 6]);
        assert!(result.iter().all(|tx| tx.category == Category::FOOD));
    }

    #[rstest]
    #[case::digit_anywhere("5", vec![1, 2, 3, 8])]
    #[case::fractional_part(".9", vec![4])]
    #[case::trailing_zeros_dropped("234.50", vec![])]
    #[case::sign_is_part_of_the_text("-8", vec![6])]
    fn test_amount_substring_search(#[case] search: &str, #[case] expected: Vec<u64>) {
        let transactions = demo_transactions();

        let ids: Vec<u64> = filter(&transactions, search, Category::ALL)
            .iter()
            .map(|tx| tx.id)
            .collect();

        assert_eq!(ids, expected);
    }

    #[test]
    fn test_search_and_category_combine() {
        let transactions = demo_transactions();

        let result = filter(&transactions, "rest", Category::FOOD);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "Restaurante");

        let result = filter(&transactions, "rest", Category::HEALTH);
        assert!(result.is_empty());
    }

    #[test]
    fn test_unknown_category_matches_nothing() {
        let transactions = demo_transactions();

        assert!(filter(&transactions, "", "Viagem").is_empty());
    }
}
