use nalgebra::Point3;

pub trait Closest {
    fn closest_point(&self, p: Point3<f64>) -> Point3<f64>;

    fn distance(&self, p: Point3<f64>) -> f64 {
        (self.closest_point(p) - p).norm()
    }
}
