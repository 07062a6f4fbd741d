pub trait To<T1> {
    fn to(self) -> T1;
}

impl<T0, T1: From<T0>> To<Vec<T1>> for Vec<T0> {
    fn to(self) -> Vec<T1> {
        self.into_iter().map(|x| x.into()).collect()
    }
}

impl<const N: usize, T0, T1: From<T0>> To<Vec<T1>> for [T0; N] {
    fn to(self) -> Vec<T1> {
        self.into_iter().map(|x| x.into()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::r2::{Point, R2};

    #[test]
    fn tuples_to_points() {
        let points: Vec<Point> = [(0., 0.), (4., 3.)].to();
        assert_eq!(points, vec![R2::new(0., 0.), R2::new(4., 3.)]);
        let points: Vec<Point> = vec![(1., 2.)].to();
        assert_eq!(points, vec![R2::new(1., 2.)]);
    }
}
