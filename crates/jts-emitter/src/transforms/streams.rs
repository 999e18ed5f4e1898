//! `java.io` streams to Node.js streams.
//!
//! `InputStream inputStream = new FileInputStream(path);` becomes
//! `const inputStream: Readable = Fs.createReadStream(path);`, and
//! `StringWriter` becomes `Writable`.

use jts_ast::visit::{VisitMut, walk_class_type, walk_expr};
use jts_ast::{ClassType, Expr};

pub struct FileInputStreamPass;

impl VisitMut for FileInputStreamPass {
    fn visit_expr(&mut self, expr: &mut Expr) {
        walk_expr(self, expr);
        if let Expr::ObjectCreation { ty, arguments } = expr {
            if ty.scope.is_none() && ty.name == "FileInputStream" {
                let arguments = std::mem::take(arguments);
                *expr = Expr::call(Some(Expr::name("Fs")), "createReadStream", arguments);
            }
        }
    }

    fn visit_class_type(&mut self, ty: &mut ClassType) {
        walk_class_type(self, ty);
        if ty.scope.is_none() && matches!(ty.name.as_str(), "InputStream" | "FileInputStream") {
            ty.name = "Readable".to_string();
        }
    }
}

pub struct StringWriterPass;

impl VisitMut for StringWriterPass {
    fn visit_class_type(&mut self, ty: &mut ClassType) {
        walk_class_type(self, ty);
        if ty.scope.is_none() && ty.name == "StringWriter" {
            ty.name = "Writable".to_string();
        }
    }
}
