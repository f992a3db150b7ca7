pub trait FromCoordinates<T> {
    /// Creates a new instance of the struct from the given coordinates.
    /// # Example
    /// ```
    /// use rs_pairforce::models::{FromCoordinates, Vector3D};
    ///
    /// let v = Vector3D::from_coord((1.0, 2.0, 3.0));
    /// assert_eq!(v.z, 3.0);
    ///
    /// let w = Vector3D::from_coord([1.0, 2.0, 3.0]);
    /// assert_eq!(v, w);
    /// ```
    fn from_coord(position: T) -> Self;
}

pub trait ToCoordinates<T> {
    /// Converts the struct to plain coordinates.
    /// # Example
    /// ```
    /// use rs_pairforce::models::{ToCoordinates, Vector3D};
    ///
    /// let v = Vector3D::new(1.0, 2.0, 3.0);
    /// let (x, y, z): (f64, f64, f64) = v.to_coord();
    /// assert_eq!((x, y, z), (1.0, 2.0, 3.0));
    /// ```
    fn to_coord(&self) -> T;
}
