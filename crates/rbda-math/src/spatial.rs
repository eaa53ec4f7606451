//! 6D spatial motion and force vectors.
//!
//! A `Motion` is a twist [ω; v] (spatial velocity or acceleration).
//! A `Force` is a wrench [τ; f], dual to `Motion` under the power pairing.
//! Cross-product conventions follow Featherstone eq. 2.33 / 2.34.

use crate::{Vec3, Vec6};

/// 6D spatial motion vector (velocity or acceleration of a rigid body).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Motion {
    /// Angular component ω.
    pub angular: Vec3,
    /// Linear component v.
    pub linear: Vec3,
}

impl Motion {
    /// Create from angular and linear parts.
    #[inline]
    pub fn new(angular: Vec3, linear: Vec3) -> Self {
        Self { angular, linear }
    }

    /// Zero motion.
    #[inline]
    pub fn zero() -> Self {
        Self {
            angular: Vec3::zeros(),
            linear: Vec3::zeros(),
        }
    }

    /// Pack as a 6-vector [angular; linear].
    #[inline]
    pub fn to_vector(&self) -> Vec6 {
        Vec6::new(
            self.angular.x,
            self.angular.y,
            self.angular.z,
            self.linear.x,
            self.linear.y,
            self.linear.z,
        )
    }

    /// Unpack from a 6-vector [angular; linear].
    #[inline]
    pub fn from_vector(v: &Vec6) -> Self {
        Self::new(Vec3::new(v[0], v[1], v[2]), Vec3::new(v[3], v[4], v[5]))
    }

    /// Spatial cross product of two motions (Lie bracket): v₁ × v₂.
    ///
    /// Generates the velocity-dependent bias terms of the acceleration
    /// recursion.
    pub fn cross(&self, other: &Motion) -> Motion {
        Motion::new(
            self.angular.cross(&other.angular),
            self.angular.cross(&other.linear) + self.linear.cross(&other.angular),
        )
    }

    /// Spatial cross product of a motion against a force: v ×* f.
    ///
    /// Generates the bias-force term of the Newton-Euler equations.
    pub fn cross_force(&self, f: &Force) -> Force {
        Force::new(
            self.angular.cross(&f.angular) + self.linear.cross(&f.linear),
            self.angular.cross(&f.linear),
        )
    }

    /// Power pairing with a wrench: ω·τ + v·f.
    #[inline]
    pub fn dot(&self, f: &Force) -> f64 {
        self.angular.dot(&f.angular) + self.linear.dot(&f.linear)
    }
}

impl std::ops::Add for Motion {
    type Output = Motion;
    #[inline]
    fn add(self, rhs: Motion) -> Motion {
        Motion::new(self.angular + rhs.angular, self.linear + rhs.linear)
    }
}

impl std::ops::Sub for Motion {
    type Output = Motion;
    #[inline]
    fn sub(self, rhs: Motion) -> Motion {
        Motion::new(self.angular - rhs.angular, self.linear - rhs.linear)
    }
}

impl std::ops::Neg for Motion {
    type Output = Motion;
    #[inline]
    fn neg(self) -> Motion {
        Motion::new(-self.angular, -self.linear)
    }
}

impl std::ops::Mul<f64> for Motion {
    type Output = Motion;
    #[inline]
    fn mul(self, rhs: f64) -> Motion {
        Motion::new(self.angular * rhs, self.linear * rhs)
    }
}

/// 6D spatial force vector (wrench acting on a rigid body).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Force {
    /// Angular component τ (moment).
    pub angular: Vec3,
    /// Linear component f.
    pub linear: Vec3,
}

impl Force {
    /// Create from angular and linear parts.
    #[inline]
    pub fn new(angular: Vec3, linear: Vec3) -> Self {
        Self { angular, linear }
    }

    /// Zero wrench.
    #[inline]
    pub fn zero() -> Self {
        Self {
            angular: Vec3::zeros(),
            linear: Vec3::zeros(),
        }
    }

    /// Pack as a 6-vector [angular; linear].
    #[inline]
    pub fn to_vector(&self) -> Vec6 {
        Vec6::new(
            self.angular.x,
            self.angular.y,
            self.angular.z,
            self.linear.x,
            self.linear.y,
            self.linear.z,
        )
    }

    /// Unpack from a 6-vector [angular; linear].
    #[inline]
    pub fn from_vector(v: &Vec6) -> Self {
        Self::new(Vec3::new(v[0], v[1], v[2]), Vec3::new(v[3], v[4], v[5]))
    }
}

impl std::ops::Add for Force {
    type Output = Force;
    #[inline]
    fn add(self, rhs: Force) -> Force {
        Force::new(self.angular + rhs.angular, self.linear + rhs.linear)
    }
}

impl std::ops::AddAssign for Force {
    #[inline]
    fn add_assign(&mut self, rhs: Force) {
        self.angular += rhs.angular;
        self.linear += rhs.linear;
    }
}

impl std::ops::Sub for Force {
    type Output = Force;
    #[inline]
    fn sub(self, rhs: Force) -> Force {
        Force::new(self.angular - rhs.angular, self.linear - rhs.linear)
    }
}

impl std::ops::Neg for Force {
    type Output = Force;
    #[inline]
    fn neg(self) -> Force {
        Force::new(-self.angular, -self.linear)
    }
}

impl std::ops::Mul<f64> for Force {
    type Output = Force;
    #[inline]
    fn mul(self, rhs: f64) -> Force {
        Force::new(self.angular * rhs, self.linear * rhs)
    }
}
