pub const MIN_HEIGHT: i64 = 1;
pub const MAX_HEIGHT: i64 = 20;

/// Rows grow from one star to `height` stars.
pub fn right_triangle(height: usize) -> String {
    (1..=height).map(|n| format!("{}\n", "*".repeat(n))).collect()
}

/// Rows shrink from `height` stars to one.
pub fn inverted_triangle(height: usize) -> String {
    (1..=height).rev().map(|n| format!("{}\n", "*".repeat(n))).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_right_triangle() {
        assert_eq!(right_triangle(3), "*\n**\n***\n");
        assert_eq!(right_triangle(1), "*\n");
    }

    #[test]
    fn test_inverted_triangle() {
        assert_eq!(inverted_triangle(3), "***\n**\n*\n");
    }

    #[test]
    fn test_zero_height_is_empty() {
        assert_eq!(right_triangle(0), "");
        assert_eq!(inverted_triangle(0), "");
    }

    #[test]
    fn test_max_height_rows() {
        let shape = right_triangle(MAX_HEIGHT as usize);
        let rows: Vec<&str> = shape.lines().collect();
        assert_eq!(rows.len(), 20);
        assert_eq!(rows[19].len(), 20);
        assert_eq!(inverted_triangle(20).lines().next().map(str::len), Some(20));
    }
}
