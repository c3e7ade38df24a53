// src/products/views.rs
//! HTML rendering for the inventory page: the add-product form on one side
//! and the product table on the other. Everything user-supplied is escaped.

use super::models::{Category, Product, ProductForm};
use crate::common::{escape_html, format_price, ValidationResult};

/// Everything the page needs. The flash has already been taken from the
/// session, so rendering never touches shared state.
#[derive(Debug, Clone, Default)]
pub struct PageView {
    pub products: Vec<Product>,
    pub errors: ValidationResult,
    pub echo: ProductForm,
    pub flash: Option<String>,
}

fn field_class(errors: &ValidationResult, field: &str) -> &'static str {
    if errors.has_error(field) {
        " is-invalid"
    } else {
        ""
    }
}

fn field_feedback(errors: &ValidationResult, field: &str) -> String {
    match errors.message_for(field) {
        Some(message) => format!(
            r#"
                            <div class="invalid-feedback">{}</div>"#,
            escape_html(message)
        ),
        None => String::new(),
    }
}

fn render_flash(flash: Option<&str>) -> String {
    match flash.filter(|message| !message.is_empty()) {
        Some(message) => format!(
            r#"
            <div class="alert alert-success alert-dismissible fade show" role="alert">
                {}
                <button type="button" class="btn-close" data-bs-dismiss="alert" aria-label="Close"></button>
            </div>"#,
            escape_html(message)
        ),
        None => String::new(),
    }
}

fn render_error_summary(errors: &ValidationResult) -> &'static str {
    if errors.is_valid() {
        ""
    } else {
        r#"
            <div class="alert alert-danger">هناك أخطاء في النموذج. الرجاء تصحيحها ثم المحاولة مرة أخرى.</div>"#
    }
}

fn render_category_options(selected: &str) -> String {
    Category::ALL
        .iter()
        .map(|category| {
            let name = category.as_str();
            format!(
                r#"
                                <option value="{value}"{selected}>{value}</option>"#,
                value = escape_html(name),
                selected = if selected == name { " selected" } else { "" },
            )
        })
        .collect()
}

fn render_form(errors: &ValidationResult, echo: &ProductForm) -> String {
    format!(
        r#"
            <div class="card shadow-sm mb-4">
                <div class="card-body">
                    <h5 class="card-title">إضافة منتج جديد</h5>
                    <form method="post" novalidate>
                        <input type="hidden" name="action" value="add">

                        <div class="mb-3">
                            <label class="form-label">اسم المنتج</label>
                            <input type="text" name="name" class="form-control{name_class}" value="{name}">{name_feedback}
                        </div>

                        <div class="mb-3">
                            <label class="form-label">الوصف</label>
                            <textarea name="description" rows="3" class="form-control{description_class}">{description}</textarea>{description_feedback}
                        </div>

                        <div class="mb-3">
                            <label class="form-label">السعر (USD)</label>
                            <input type="number" step="0.01" name="price" class="form-control{price_class}" value="{price}">{price_feedback}
                        </div>

                        <div class="mb-3">
                            <label class="form-label">التصنيف</label>
                            <select name="category" class="form-select{category_class}">
                                <option value="">-- اختر تصنيف --</option>{options}
                            </select>{category_feedback}
                        </div>

                        <div class="d-grid">
                            <button class="btn btn-primary">أضف المنتج</button>
                        </div>
                    </form>
                </div>
            </div>"#,
        name_class = field_class(errors, "name"),
        name = escape_html(echo.name()),
        name_feedback = field_feedback(errors, "name"),
        description_class = field_class(errors, "description"),
        description = escape_html(echo.description()),
        description_feedback = field_feedback(errors, "description"),
        price_class = field_class(errors, "price"),
        price = escape_html(echo.price()),
        price_feedback = field_feedback(errors, "price"),
        category_class = field_class(errors, "category"),
        options = render_category_options(echo.category()),
        category_feedback = field_feedback(errors, "category"),
    )
}

fn render_product_rows(products: &[Product]) -> String {
    products
        .iter()
        .map(|p| {
            format!(
                r#"
                            <tr>
                                <td>{}</td>
                                <td>{}</td>
                                <td>{}</td>
                                <td>{}</td>
                                <td class="text-end">{}</td>
                            </tr>"#,
                p.id,
                escape_html(&p.name),
                escape_html(&p.description),
                escape_html(p.category.as_str()),
                format_price(p.price),
            )
        })
        .collect()
}

fn render_table(products: &[Product]) -> String {
    format!(
        r#"
            <div class="card shadow-sm">
                <div class="card-body">
                    <h5 class="card-title">قائمة المنتجات</h5>
                    <div class="table-responsive">
                        <table class="table table-striped align-middle">
                            <thead>
                            <tr>
                                <th>#</th>
                                <th>الاسم</th>
                                <th>الوصف</th>
                                <th>التصنيف</th>
                                <th class="text-end">السعر (USD)</th>
                            </tr>
                            </thead>
                            <tbody>{}
                            </tbody>
                        </table>
                    </div>
                </div>
            </div>"#,
        render_product_rows(products)
    )
}

pub fn render_page(view: &PageView) -> String {
    format!(
        r#"<!doctype html>
<html lang="ar" dir="rtl">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>إدارة المنتجات - Inventory</title>
    <link href="https://cdn.jsdelivr.net/npm/bootstrap@5.3.2/dist/css/bootstrap.min.css" rel="stylesheet">
</head>
<body class="bg-light">
<div class="container py-4">
    <div class="row mb-3">
        <div class="col-12">
            <h1 class="h3">نظام إدارة المنتجات</h1>
            <p class="text-muted">أضِف، وعرض المنتجات مع التحقق من صحة المدخلات وعرض تنبيهات Bootstrap.</p>
        </div>
    </div>

    <div class="row">
        <div class="col-lg-6">{flash}{summary}{form}
        </div>

        <div class="col-lg-6">{table}
        </div>
    </div>
</div>

<script src="https://cdn.jsdelivr.net/npm/bootstrap@5.3.2/dist/js/bootstrap.bundle.min.js"></script>
</body>
</html>
"#,
        flash = render_flash(view.flash.as_deref()),
        summary = render_error_summary(&view.errors),
        form = render_form(&view.errors, &view.echo),
        table = render_table(&view.products),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::products::models::seed_products;

    #[test]
    fn test_empty_view_renders_seed_table_without_alerts() {
        let html = render_page(&PageView {
            products: seed_products(),
            ..Default::default()
        });

        assert!(html.contains("Laptop Pro 15"));
        assert!(html.contains("1,499.99"));
        assert!(html.contains("4.50"));
        assert!(!html.contains("alert-success"));
        assert!(!html.contains("alert-danger"));
        assert!(!html.contains("is-invalid"));
    }

    #[test]
    fn test_flash_is_rendered() {
        let html = render_page(&PageView {
            flash: Some("done".to_string()),
            ..Default::default()
        });
        assert!(html.contains("alert-success"));
        assert!(html.contains("done"));
    }

    #[test]
    fn test_errors_mark_fields_and_echo_values() {
        let mut errors = ValidationResult::new();
        errors.add_error("price", "bad price");

        let html = render_page(&PageView {
            errors,
            echo: ProductForm {
                name: Some("Pen".to_string()),
                price: Some("abc".to_string()),
                category: Some("Books".to_string()),
                ..Default::default()
            },
            ..Default::default()
        });

        assert!(html.contains("alert-danger"));
        assert!(html.contains(r#"class="form-control is-invalid" value="abc""#));
        assert!(html.contains(r#"<div class="invalid-feedback">bad price</div>"#));
        assert!(html.contains(r#"class="form-control" value="Pen""#));
        assert!(html.contains(r#"<option value="Books" selected>Books</option>"#));
        assert!(html.contains(r#"<option value="Home">Home</option>"#));
    }

    #[test]
    fn test_user_input_is_escaped() {
        let html = render_page(&PageView {
            echo: ProductForm {
                name: Some(r#""><script>alert(1)</script>"#.to_string()),
                ..Default::default()
            },
            ..Default::default()
        });

        assert!(!html.contains("<script>alert(1)</script>"));
        assert!(html.contains("&quot;&gt;&lt;script&gt;"));
    }
}
