/// A pixel position inside a [`Region`](crate::core::data::region::Region), origin top-left.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Point {
    pub x: u32,
    pub y: u32,
}
