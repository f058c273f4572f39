use coinflip_core::model::Calculation;

/// UI-ready representation of one result card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CalculationCardVm {
    /// 1-based position counted from the oldest entry.
    pub label: usize,
    pub coins: u32,
    pub heads: u32,
    pub probability_str: String,
}

/// Map newest-first calculations to cards labelled `len - index`.
#[must_use]
pub fn map_calculation_cards(items: &[Calculation]) -> Vec<CalculationCardVm> {
    let total = items.len();
    items
        .iter()
        .enumerate()
        .map(|(index, item)| CalculationCardVm {
            label: total - index,
            coins: item.coins(),
            heads: item.heads(),
            probability_str: format_probability(item.probability()),
        })
        .collect()
}

/// Six decimal places and a percent sign. Overflowed values keep their
/// `NaN` / `Infinity` spelling.
#[must_use]
pub fn format_probability(percent: f64) -> String {
    if percent.is_nan() {
        "NaN%".to_owned()
    } else if percent.is_infinite() {
        if percent.is_sign_positive() {
            "Infinity%".to_owned()
        } else {
            "-Infinity%".to_owned()
        }
    } else {
        format!("{percent:.6}%")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn calc(coins: u32, heads: u32) -> Calculation {
        Calculation::new(coins, heads).unwrap()
    }

    #[test]
    fn formats_six_decimals() {
        assert_eq!(format_probability(24.609_375), "24.609375%");
        assert_eq!(format_probability(50.0), "50.000000%");
        assert_eq!(format_probability(0.0), "0.000000%");
    }

    #[test]
    fn formats_degenerate_values() {
        assert_eq!(format_probability(f64::NAN), "NaN%");
        assert_eq!(format_probability(f64::INFINITY), "Infinity%");
    }

    #[test]
    fn labels_count_down_from_length() {
        let items = vec![calc(3, 1), calc(2, 1), calc(1, 0)];
        let cards = map_calculation_cards(&items);
        let labels: Vec<usize> = cards.iter().map(|c| c.label).collect();
        assert_eq!(labels, vec![3, 2, 1]);
        assert_eq!(cards[0].coins, 3);
        assert_eq!(cards[0].probability_str, "37.500000%");
    }

    #[test]
    fn empty_list_has_no_cards() {
        assert!(map_calculation_cards(&[]).is_empty());
    }
}
