/// Removes the value at `from` and reinserts it so that it ends up at `to`
/// in the resulting order. Does nothing if `from` equals `to` or either
/// index is outside the vec bounds.
pub fn move_row<T>(from: usize, to: usize, rows: &mut Vec<T>) {
    if from == to || from >= rows.len() || to >= rows.len() {
        return;
    }

    let row = rows.remove(from);
    rows.insert(to, row);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn moves_forward() {
        let mut rows = vec!["a", "b", "c", "d"];
        move_row(1, 3, &mut rows);
        assert_eq!(rows, ["a", "c", "d", "b"]);
    }

    #[test]
    fn moves_backward() {
        let mut rows = vec!["a", "b", "c", "d"];
        move_row(3, 1, &mut rows);
        assert_eq!(rows, ["a", "d", "b", "c"]);
    }

    #[test]
    fn same_index_is_a_noop() {
        let mut rows = vec!["a", "b", "c"];
        move_row(1, 1, &mut rows);
        assert_eq!(rows, ["a", "b", "c"]);
    }

    #[test]
    fn out_of_bounds_indices_are_noops() {
        let mut rows = vec!["a", "b"];
        move_row(5, 0, &mut rows);
        move_row(0, 5, &mut rows);
        assert_eq!(rows, ["a", "b"]);

        let mut empty: Vec<&str> = Vec::new();
        move_row(0, 0, &mut empty);
        assert!(empty.is_empty());
    }
}
