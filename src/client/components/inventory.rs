//! Screen-specific pieces for the inventory screen: cards, the form modal,
//! and the detail modal.

use chrono::NaiveDate;
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{
    FaBagShopping, FaBone, FaBox, FaEllipsisVertical, FaMinus, FaPenToSquare, FaPills, FaPlus,
    FaSyringe, FaTrash, FaTriangleExclamation,
};
use dioxus_free_icons::Icon;

use crate::client::components::Modal;
use crate::model::inventory::{Category, InventoryForm, InventoryItem};

pub fn category_icon(category: Category) -> Element {
    match category {
        Category::Medicamento => rsx!(Icon { width: 20, height: 20, icon: FaPills }),
        Category::Vacuna => rsx!(Icon { width: 20, height: 20, icon: FaSyringe }),
        Category::Suministro => rsx!(Icon { width: 20, height: 20, icon: FaBox }),
        Category::Alimento => rsx!(Icon { width: 20, height: 20, icon: FaBone }),
        Category::Accesorio => rsx!(Icon { width: 20, height: 20, icon: FaBagShopping }),
        Category::Otro => rsx!(Icon { width: 20, height: 20, icon: FaBox }),
    }
}

pub fn category_badge_class(category: Category) -> &'static str {
    match category {
        Category::Medicamento => "badge badge-info",
        Category::Vacuna => "badge badge-success",
        Category::Suministro => "badge badge-primary",
        Category::Alimento => "badge badge-warning",
        Category::Accesorio => "badge badge-secondary",
        Category::Otro => "badge badge-ghost",
    }
}

#[component]
pub fn ItemCard(
    item: InventoryItem,
    today: NaiveDate,
    on_view: EventHandler<InventoryItem>,
    on_edit: EventHandler<InventoryItem>,
    on_adjust: EventHandler<(InventoryItem, i64)>,
    on_toggle: EventHandler<InventoryItem>,
    on_delete: EventHandler<InventoryItem>,
) -> Element {
    let low = item.is_low_stock();
    let expired = item.is_expired(today);
    let near_expiry = item.is_near_expiry(today);

    let view = item.clone();
    let edit = item.clone();
    let toggle = item.clone();
    let delete = item.clone();
    let minus = item.clone();
    let plus = item.clone();

    rsx!(
        div { class: "card shadow-sm hover:shadow-md transition-shadow",
            div { class: "card-body",
                div { class: "flex justify-between items-start",
                    div { class: "flex-1",
                        div { class: "flex items-center gap-2 mb-2 flex-wrap",
                            span { class: category_badge_class(item.category),
                                {item.category.label()}
                            }
                            if !item.active {
                                span { class: "badge badge-ghost", "Inactivo" }
                            }
                            if low {
                                span { class: "badge badge-error gap-1",
                                    Icon { width: 12, height: 12, icon: FaTriangleExclamation }
                                    "Stock Bajo"
                                }
                            }
                            if expired {
                                span { class: "badge badge-error", "Vencido" }
                            } else if near_expiry {
                                span { class: "badge badge-warning", "Por vencer" }
                            }
                        }
                        h2 { class: "card-title text-xl flex items-center gap-2",
                            {category_icon(item.category)}
                            "{item.name}"
                        }
                        if let Some(sku) = item.sku.as_ref() {
                            p { class: "text-sm text-base-content/60", "SKU: {sku}" }
                        }
                    }

                    div { class: "dropdown dropdown-end",
                        label { tabindex: "0", class: "btn btn-ghost btn-sm btn-circle",
                            Icon { width: 16, height: 16, icon: FaEllipsisVertical }
                        }
                        ul {
                            tabindex: "0",
                            class: "dropdown-content menu bg-base-100 rounded-box z-10 w-52 p-2 shadow",
                            li {
                                a { onclick: move |_| on_view.call(view.clone()), "Ver detalles" }
                            }
                            li {
                                a { onclick: move |_| on_edit.call(edit.clone()),
                                    Icon { width: 14, height: 14, icon: FaPenToSquare }
                                    "Editar"
                                }
                            }
                            li {
                                a { onclick: move |_| on_toggle.call(toggle.clone()),
                                    if item.active { "Desactivar" } else { "Activar" }
                                }
                            }
                            li {
                                a {
                                    class: "text-error",
                                    onclick: move |_| on_delete.call(delete.clone()),
                                    Icon { width: 14, height: 14, icon: FaTrash }
                                    "Eliminar"
                                }
                            }
                        }
                    }
                }

                div { class: "flex flex-col gap-2 mt-2 text-sm",
                    div { class: "flex items-center justify-between",
                        span { class: "text-base-content/60", "Stock actual:" }
                        div { class: "flex items-center gap-2",
                            button {
                                class: "btn btn-xs btn-circle btn-outline",
                                disabled: item.quantity == 0,
                                onclick: move |_| on_adjust.call((minus.clone(), minus.quantity - 1)),
                                Icon { width: 10, height: 10, icon: FaMinus }
                            }
                            span {
                                class: if low { "font-bold text-error" } else { "font-bold" },
                                "{item.quantity}"
                            }
                            button {
                                class: "btn btn-xs btn-circle btn-outline",
                                onclick: move |_| on_adjust.call((plus.clone(), plus.quantity + 1)),
                                Icon { width: 10, height: 10, icon: FaPlus }
                            }
                        }
                    }
                    div { class: "flex items-center justify-between",
                        span { class: "text-base-content/60", "Stock mínimo:" }
                        span { "{item.min_quantity}" }
                    }
                    div { class: "flex items-center justify-between",
                        span { class: "text-base-content/60", "Precio unitario:" }
                        span { {format!("${:.2}", item.unit_price)} }
                    }
                    div { class: "flex items-center justify-between",
                        span { class: "text-base-content/60", "Valor total:" }
                        span { class: "font-medium", {format!("${:.2}", item.total_value())} }
                    }
                    if let Some(supplier) = item.supplier.as_ref() {
                        div { class: "flex items-center justify-between",
                            span { class: "text-base-content/60", "Proveedor:" }
                            span { "{supplier}" }
                        }
                    }
                    if let Some(expiration) = item.expiration_date {
                        div { class: "flex items-center justify-between",
                            span { class: "text-base-content/60", "Expira:" }
                            span {
                                class: if expired { "text-error" } else if near_expiry { "text-warning" } else { "" },
                                {expiration.format("%d/%m/%Y").to_string()}
                            }
                        }
                    }
                }
            }
        }
    )
}

#[component]
pub fn InventoryFormModal(
    form: Signal<InventoryForm>,
    editing: bool,
    on_save: EventHandler<()>,
    on_close: EventHandler<()>,
) -> Element {
    let title = if editing { "Editar Producto" } else { "Nuevo Producto" }.to_string();
    let f = form.read().clone();
    let category_value = f.category.as_str();

    rsx!(
        Modal { title, on_close: move |_| on_close.call(()),
            div { class: "flex flex-col gap-4",
                div { class: "grid grid-cols-1 md:grid-cols-2 gap-4",
                    label { class: "form-control",
                        span { class: "label-text mb-1", "Nombre *" }
                        input {
                            class: "input input-bordered w-full",
                            placeholder: "Nombre del producto",
                            value: "{f.name}",
                            oninput: move |e| form.write().name = e.value(),
                        }
                    }
                    label { class: "form-control",
                        span { class: "label-text mb-1", "Categoría *" }
                        select {
                            class: "select select-bordered w-full",
                            value: "{category_value}",
                            onchange: move |e| {
                                form.write().category = match e.value().as_str() {
                                    "medicamento" => Category::Medicamento,
                                    "vacuna" => Category::Vacuna,
                                    "suministro" => Category::Suministro,
                                    "alimento" => Category::Alimento,
                                    "accesorio" => Category::Accesorio,
                                    _ => Category::Otro,
                                };
                            },
                            for category in Category::ALL {
                                option {
                                    value: category.as_str(),
                                    {category.label()}
                                }
                            }
                        }
                    }
                }

                label { class: "form-control",
                    span { class: "label-text mb-1", "Descripción" }
                    textarea {
                        class: "textarea textarea-bordered w-full",
                        rows: "2",
                        placeholder: "Descripción del producto",
                        value: "{f.description}",
                        oninput: move |e| form.write().description = e.value(),
                    }
                }

                div { class: "grid grid-cols-1 md:grid-cols-2 gap-4",
                    label { class: "form-control",
                        span { class: "label-text mb-1", "SKU" }
                        input {
                            class: "input input-bordered w-full",
                            placeholder: "Código del producto",
                            value: "{f.sku}",
                            oninput: move |e| form.write().sku = e.value(),
                        }
                    }
                    label { class: "form-control",
                        span { class: "label-text mb-1", "Proveedor" }
                        input {
                            class: "input input-bordered w-full",
                            placeholder: "Proveedor",
                            value: "{f.supplier}",
                            oninput: move |e| form.write().supplier = e.value(),
                        }
                    }
                }

                div { class: "grid grid-cols-1 md:grid-cols-3 gap-4",
                    label { class: "form-control",
                        span { class: "label-text mb-1", "Cantidad" }
                        input {
                            class: "input input-bordered w-full",
                            r#type: "number",
                            min: "0",
                            value: "{f.quantity}",
                            oninput: move |e| form.write().quantity = e.value(),
                        }
                    }
                    label { class: "form-control",
                        span { class: "label-text mb-1", "Stock Mínimo" }
                        input {
                            class: "input input-bordered w-full",
                            r#type: "number",
                            min: "0",
                            value: "{f.min_quantity}",
                            oninput: move |e| form.write().min_quantity = e.value(),
                        }
                    }
                    label { class: "form-control",
                        span { class: "label-text mb-1", "Precio Unitario" }
                        input {
                            class: "input input-bordered w-full",
                            r#type: "number",
                            min: "0",
                            step: "0.01",
                            value: "{f.unit_price}",
                            oninput: move |e| form.write().unit_price = e.value(),
                        }
                    }
                }

                label { class: "form-control",
                    span { class: "label-text mb-1", "Fecha de Expiración" }
                    input {
                        class: "input input-bordered w-full",
                        r#type: "date",
                        value: "{f.expiration_date}",
                        oninput: move |e| form.write().expiration_date = e.value(),
                    }
                }

                div { class: "modal-action",
                    button {
                        class: "btn btn-outline",
                        onclick: move |_| on_close.call(()),
                        "Cancelar"
                    }
                    button {
                        class: "btn btn-primary",
                        onclick: move |_| on_save.call(()),
                        if editing { "Actualizar Producto" } else { "Agregar Producto" }
                    }
                }
            }
        }
    )
}

#[component]
pub fn ItemDetailModal(
    item: InventoryItem,
    today: NaiveDate,
    on_edit: EventHandler<InventoryItem>,
    on_close: EventHandler<()>,
) -> Element {
    let edit = item.clone();

    rsx!(
        Modal {
            title: format!("Detalles del Producto: {}", item.name),
            on_close: move |_| on_close.call(()),
            div { class: "grid grid-cols-1 md:grid-cols-2 gap-4",
                div { class: "card bg-base-200",
                    div { class: "card-body p-4",
                        h3 { class: "font-semibold flex items-center gap-2",
                            {category_icon(item.category)}
                            "Producto"
                        }
                        div { class: "text-sm flex flex-col gap-1 mt-2",
                            p { {format!("Categoría: {}", item.category.label())} }
                            p { {format!("SKU: {}", item.sku.clone().unwrap_or_else(|| "N/A".into()))} }
                            p { {format!(
                                "Descripción: {}",
                                item.description.clone().unwrap_or_else(|| "Sin descripción".into())
                            )} }
                            p { {format!(
                                "Proveedor: {}",
                                item.supplier.clone().unwrap_or_else(|| "N/A".into())
                            )} }
                        }
                    }
                }
                div { class: "card bg-base-200",
                    div { class: "card-body p-4",
                        h3 { class: "font-semibold", "Stock y Precio" }
                        div { class: "text-sm flex flex-col gap-1 mt-2",
                            p { "Stock actual: {item.quantity}" }
                            p { "Stock mínimo: {item.min_quantity}" }
                            p { {format!("Precio unitario: ${:.2}", item.unit_price)} }
                            p { {format!("Valor total: ${:.2}", item.total_value())} }
                            p { {format!(
                                "Expiración: {}",
                                item.expiration_date
                                    .map(|d| d.format("%d/%m/%Y").to_string())
                                    .unwrap_or_else(|| "N/A".into())
                            )} }
                            p { {format!("Estado: {}", if item.active { "Activo" } else { "Inactivo" })} }
                            p { {format!("Registrado: {}", item.created_at.format("%d/%m/%Y"))} }
                            if item.is_expired(today) {
                                p { class: "text-error font-medium", "Este producto está vencido" }
                            } else if item.is_near_expiry(today) {
                                p { class: "text-warning font-medium", "Este producto vence en menos de 30 días" }
                            }
                        }
                    }
                }
            }

            div { class: "modal-action",
                button {
                    class: "btn btn-outline",
                    onclick: move |_| on_edit.call(edit.clone()),
                    "Editar Producto"
                }
                button {
                    class: "btn btn-primary",
                    onclick: move |_| on_close.call(()),
                    "Cerrar"
                }
            }
        }
    )
}
