//! STL export

use crate::mesh::GearMesh;
use std::io::Cursor;

impl GearMesh {
    /// Convert this mesh to an **ASCII STL** string with the given `name`.
    ///
    /// ```rust
    /// # use gearmesh::{GearMesh, GearSpec};
    /// # use std::error::Error;
    /// # fn main() -> Result<(), Box<dyn Error>> {
    /// let mesh = GearMesh::gear(&GearSpec::new(1.0, 4.0, 1.0, 20, 0.7))?;
    /// let text = mesh.to_stl_ascii("gear1");
    /// assert!(text.starts_with("solid gear1"));
    /// # Ok(())
    /// # }
    /// ```
    pub fn to_stl_ascii(&self, name: &str) -> String {
        let mut out = String::new();
        out.push_str(&format!("solid {name}\n"));

        for tri in self.triangulate() {
            let n = tri[0].normal;
            out.push_str(&format!(
                "  facet normal {:.6} {:.6} {:.6}\n",
                n.x, n.y, n.z
            ));
            out.push_str("    outer loop\n");
            for v in &tri {
                let p = v.pos;
                out.push_str(&format!(
                    "      vertex {:.6} {:.6} {:.6}\n",
                    p.x, p.y, p.z
                ));
            }
            out.push_str("    endloop\n");
            out.push_str("  endfacet\n");
        }

        out.push_str(&format!("endsolid {name}\n"));
        out
    }

    /// Convert this mesh to a **binary STL** byte vector. The binary format
    /// carries no solid name; the parameter mirrors the ASCII exporter.
    pub fn to_stl_binary(&self, _name: &str) -> std::io::Result<Vec<u8>> {
        use stl_io::{Normal, Triangle, Vertex, write_stl};

        #[allow(clippy::unnecessary_cast)]
        let triangles: Vec<Triangle> = self
            .triangulate()
            .into_iter()
            .map(|tri| Triangle {
                normal: Normal::new([
                    tri[0].normal.x as f32,
                    tri[0].normal.y as f32,
                    tri[0].normal.z as f32,
                ]),
                vertices: tri.map(|v| {
                    Vertex::new([v.pos.x as f32, v.pos.y as f32, v.pos.z as f32])
                }),
            })
            .collect();

        let mut cursor = Cursor::new(Vec::new());
        write_stl(&mut cursor, triangles.iter())?;
        Ok(cursor.into_inner())
    }
}
