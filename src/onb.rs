use crate::aliases::Vec3;

/// Right-handed orthonormal frame (u, v, w) around a lobe axis `w`.
#[derive(Debug, Clone, Copy)]
pub struct Onb {
    u: Vec3,
    v: Vec3,
    w: Vec3,
}

impl Onb {
    /// w_dir is not required to be normalized.
    pub fn build_from_w(w_dir: &Vec3) -> Self {
        let w = w_dir.normalize();
        // any helper axis works as long as it is far from parallel to w
        let helper = if w.x.abs() > 0.9 {
            Vec3::y()
        } else {
            Vec3::x()
        };
        let v = w.cross(&helper).normalize();
        let u = v.cross(&w);
        Onb { u, v, w }
    }
    pub fn u(&self) -> &Vec3 {
        &self.u
    }
    pub fn v(&self) -> &Vec3 {
        &self.v
    }
    pub fn w(&self) -> &Vec3 {
        &self.w
    }
    /// Frame coordinates to the enclosing shading frame.
    pub fn to_world(&self, local: &Vec3) -> Vec3 {
        local.x * self.u + local.y * self.v + local.z * self.w
    }
    /// Inverse of `to_world`.
    pub fn to_local(&self, dir: &Vec3) -> Vec3 {
        Vec3::new(dir.dot(&self.u), dir.dot(&self.v), dir.dot(&self.w))
    }
}

#[cfg(test)]
mod tests {
    use crate::aliases::Vec3;
    use crate::onb::Onb;

    #[test]
    fn onb_is_orthonormal() {
        for w in &[
            Vec3::new(0.0, 0.0, 1.0),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(0.3, -2.0, 0.5),
        ] {
            let onb = Onb::build_from_w(w);
            assert!((onb.u().norm() - 1.0).abs() < 1e-5);
            assert!((onb.v().norm() - 1.0).abs() < 1e-5);
            assert!(onb.u().dot(onb.v()).abs() < 1e-5);
            assert!(onb.u().dot(onb.w()).abs() < 1e-5);
            assert!(onb.v().dot(onb.w()).abs() < 1e-5);
            assert!((onb.u().cross(onb.v()) - onb.w()).norm() < 1e-5);
            let mapped = onb.to_world(&Vec3::new(0.0, 0.0, 1.0));
            assert!((mapped - w.normalize()).norm() < 1e-5);
        }
    }

    #[test]
    fn to_local_inverts_to_world() {
        let onb = Onb::build_from_w(&Vec3::new(0.4, 0.1, -0.7));
        let dir = Vec3::new(-0.2, 0.9, 0.3);
        assert!((onb.to_local(&onb.to_world(&dir)) - dir).norm() < 1e-5);
    }
}
