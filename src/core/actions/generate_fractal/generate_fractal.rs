use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::region::Region;

/// Evaluates `algorithm` once per pixel of `region`, in row-major order.
pub fn generate_fractal<Alg: FractalAlgorithm>(
    region: Region,
    algorithm: &Alg,
) -> Result<Vec<Alg::Success>, Alg::Failure> {
    region.points().map(|pixel| algorithm.compute(pixel)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::point::Point;
    use std::cell::Cell;
    use std::error::Error;

    #[derive(Debug, PartialEq)]
    struct StubError {}

    impl std::fmt::Display for StubError {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "StubError")
        }
    }

    impl Error for StubError {}

    #[derive(Debug, Default)]
    struct StubSuccessAlgorithm {
        calls: Cell<usize>,
    }

    impl FractalAlgorithm for StubSuccessAlgorithm {
        type Success = (u32, u32);
        type Failure = StubError;

        fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure> {
            self.calls.set(self.calls.get() + 1);
            Ok((pixel.x, pixel.y))
        }
    }

    #[derive(Debug)]
    struct StubFailureAlgorithm {}

    impl FractalAlgorithm for StubFailureAlgorithm {
        type Success = u64;
        type Failure = StubError;

        fn compute(&self, _: Point) -> Result<Self::Success, Self::Failure> {
            Err(StubError {})
        }
    }

    #[test]
    fn test_generates_row_major_results() {
        let algorithm = StubSuccessAlgorithm::default();
        let region = Region::new(3, 2).unwrap();

        let results = generate_fractal(region, &algorithm).unwrap();

        assert_eq!(results, vec![(0, 0), (1, 0), (2, 0), (0, 1), (1, 1), (2, 1)]);
    }

    #[test]
    fn test_evaluates_each_pixel_once() {
        let algorithm = StubSuccessAlgorithm::default();
        let region = Region::new(17, 9).unwrap();

        let results = generate_fractal(region, &algorithm).unwrap();

        assert_eq!(results.len(), 153);
        assert_eq!(algorithm.calls.get(), 153);
    }

    #[test]
    fn test_propagates_algorithm_failure() {
        let algorithm = StubFailureAlgorithm {};
        let region = Region::new(3, 4).unwrap();

        assert_eq!(generate_fractal(region, &algorithm), Err(StubError {}));
    }
}
