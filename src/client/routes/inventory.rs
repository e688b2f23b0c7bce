use chrono::Utc;
use dioxus::document::{Meta, Title};
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{
    FaBox, FaCalendarDays, FaDollarSign, FaDownload, FaMagnifyingGlass, FaPlus,
    FaTriangleExclamation,
};
use dioxus_free_icons::Icon;
use dioxus_logger::tracing;

use crate::client::components::inventory::{InventoryFormModal, ItemCard, ItemDetailModal};
use crate::client::components::{ConfirmDialog, EmptyState, Page, StatCard};
use crate::client::store::session::{supabase_client, use_session};
use crate::client::store::toast::use_toasts;
use crate::client::util::{backend_message, inventory};
use crate::export::{self, report, CSV_MIME};
use crate::model::inventory::{
    inventory_stats, Category, InventoryFilter, InventoryForm, InventoryItem, StockFilter,
};
use crate::model::ActiveFilter;

#[component]
pub fn Inventory() -> Element {
    let session = use_session();
    let mut toasts = use_toasts();

    let mut filter = use_signal(InventoryFilter::default);
    let mut form = use_signal(InventoryForm::default);
    let mut editing = use_signal(|| Option::<String>::None);
    let mut show_form = use_signal(|| false);
    let mut detail = use_signal(|| Option::<InventoryItem>::None);
    let mut pending_delete = use_signal(|| Option::<InventoryItem>::None);

    let mut items_res = use_resource(move || {
        let client = supabase_client(&session.read());
        async move { inventory::fetch_inventory(&client).await }
    });

    let (items, loading, load_failed): (Vec<InventoryItem>, bool, bool) =
        match &*items_res.read_unchecked() {
            Some(Ok(rows)) => (rows.clone(), false, false),
            Some(Err(err)) => {
                tracing::error!("failed to load inventory: {err}");
                (Vec::new(), false, true)
            }
            None => (Vec::new(), true, false),
        };

    let today = Utc::now().date_naive();
    let stats = inventory_stats(&items, today);
    let visible: Vec<InventoryItem> = filter
        .read()
        .apply(&items, today)
        .into_iter()
        .cloned()
        .collect();

    let export_href = export::data_url(CSV_MIME, &report::inventory_snapshot(&items));
    let export_name = report::inventory_file_name(today);

    let open_create = move |_| {
        form.set(InventoryForm::default());
        editing.set(None);
        show_form.set(true);
    };

    let open_edit = move |item: InventoryItem| {
        form.set(InventoryForm::from_item(&item));
        editing.set(Some(item.id.clone()));
        detail.set(None);
        show_form.set(true);
    };

    let save_item = move |_| {
        let payload = match form.read().validate() {
            Ok(payload) => payload,
            Err(err) => {
                toasts.write().error(err.to_string());
                return;
            }
        };

        let state = session.read().clone();
        let editing_id = editing.read().clone();
        spawn(async move {
            let client = supabase_client(&state);
            let result = match &editing_id {
                Some(id) => inventory::update_item(&client, id, &payload).await,
                None => inventory::create_item(&client, &payload).await,
            };
            match result {
                Ok(()) => {
                    toasts.write().success(if editing_id.is_some() {
                        "Producto actualizado correctamente"
                    } else {
                        "Producto agregado correctamente"
                    });
                    show_form.set(false);
                    form.set(InventoryForm::default());
                    editing.set(None);
                    items_res.restart();
                }
                Err(err) => {
                    tracing::error!("failed to save inventory item: {err}");
                    toasts
                        .write()
                        .error(backend_message(&err, "Error al guardar producto"));
                }
            }
        });
    };

    let adjust_stock = move |(item, quantity): (InventoryItem, i64)| {
        if quantity < 0 {
            toasts.write().error("La cantidad no puede ser negativa");
            return;
        }
        let state = session.read().clone();
        spawn(async move {
            let client = supabase_client(&state);
            match inventory::set_stock(&client, &item.id, quantity).await {
                Ok(()) => {
                    toasts.write().success("Stock actualizado correctamente");
                    items_res.restart();
                }
                Err(err) => {
                    tracing::error!("failed to update stock: {err}");
                    toasts
                        .write()
                        .error(backend_message(&err, "Error al actualizar stock"));
                }
            }
        });
    };

    let toggle_item = move |item: InventoryItem| {
        let state = session.read().clone();
        spawn(async move {
            let client = supabase_client(&state);
            match inventory::set_item_active(&client, &item.id, !item.active).await {
                Ok(()) => {
                    toasts.write().success(if item.active {
                        "Producto desactivado correctamente"
                    } else {
                        "Producto activado correctamente"
                    });
                    items_res.restart();
                }
                Err(err) => {
                    tracing::error!("failed to toggle item status: {err}");
                    toasts
                        .write()
                        .error(backend_message(&err, "Error al cambiar estado del producto"));
                }
            }
        });
    };

    let confirm_delete = move |_| {
        let Some(item) = pending_delete.read().clone() else {
            return;
        };
        let state = session.read().clone();
        spawn(async move {
            let client = supabase_client(&state);
            match inventory::delete_item(&client, &item.id).await {
                Ok(()) => {
                    toasts.write().success("Producto eliminado correctamente");
                    items_res.restart();
                }
                Err(err) => {
                    tracing::error!("failed to delete item: {err}");
                    toasts
                        .write()
                        .error(backend_message(&err, "Error al eliminar producto"));
                }
            }
            pending_delete.set(None);
        });
    };

    let empty_message = if filter.read().is_filtered() {
        "No se encontraron productos con los filtros aplicados"
    } else {
        "No hay productos registrados"
    }
    .to_string();
    let search_text = filter.read().search.clone();
    let total_value = format!("${:.2}", stats.total_value);

    rsx!(
        Title { "Inventario | VetCare" }
        Meta {
            name: "description",
            content: "Control de productos, medicamentos y suministros veterinarios"
        }
        Page {
            div { class: "flex flex-col md:flex-row md:items-center justify-between mb-8 gap-4",
                div {
                    h1 { class: "text-3xl font-bold mb-2", "Gestión de Inventario" }
                    p { class: "text-base-content/60",
                        "Control de productos, medicamentos y suministros veterinarios"
                    }
                }
                div { class: "flex items-center gap-3",
                    a {
                        class: "btn btn-outline gap-2",
                        href: "{export_href}",
                        download: "{export_name}",
                        Icon { width: 16, height: 16, icon: FaDownload }
                        "Exportar"
                    }
                    button {
                        class: "btn btn-primary gap-2",
                        onclick: open_create,
                        Icon { width: 16, height: 16, icon: FaPlus }
                        "Nuevo Producto"
                    }
                }
            }

            div { class: "grid grid-cols-2 md:grid-cols-3 lg:grid-cols-6 gap-4 mb-6",
                StatCard { title: "Total Productos", value: stats.total.to_string(),
                    Icon { width: 32, height: 32, icon: FaBox, class: "text-primary" }
                }
                StatCard { title: "Activos", value: stats.active.to_string(),
                    Icon { width: 32, height: 32, icon: FaBox, class: "text-green-500" }
                }
                StatCard { title: "Stock Bajo", value: stats.low_stock.to_string(),
                    Icon { width: 32, height: 32, icon: FaTriangleExclamation, class: "text-orange-500" }
                }
                StatCard { title: "Vencidos", value: stats.expired.to_string(),
                    Icon { width: 32, height: 32, icon: FaTriangleExclamation, class: "text-red-500" }
                }
                StatCard { title: "Por Vencer", value: stats.near_expiry.to_string(),
                    Icon { width: 32, height: 32, icon: FaCalendarDays, class: "text-yellow-500" }
                }
                StatCard { title: "Valor Total", value: total_value,
                    Icon { width: 32, height: 32, icon: FaDollarSign, class: "text-green-600" }
                }
            }

            div { class: "tabs tabs-boxed w-fit mb-6",
                a {
                    class: if filter.read().tab == ActiveFilter::Active { "tab tab-active" } else { "tab" },
                    onclick: move |_| filter.write().tab = ActiveFilter::Active,
                    "Activos ({stats.active})"
                }
                a {
                    class: if filter.read().tab == ActiveFilter::Inactive { "tab tab-active" } else { "tab" },
                    onclick: move |_| filter.write().tab = ActiveFilter::Inactive,
                    "Inactivos ({stats.inactive})"
                }
                a {
                    class: if filter.read().tab == ActiveFilter::All { "tab tab-active" } else { "tab" },
                    onclick: move |_| filter.write().tab = ActiveFilter::All,
                    "Todos ({stats.total})"
                }
            }

            div { class: "card shadow-sm mb-6",
                div { class: "card-body p-4",
                    div { class: "flex flex-col md:flex-row gap-4",
                        label { class: "input input-bordered flex items-center gap-2 flex-1",
                            Icon { width: 16, height: 16, icon: FaMagnifyingGlass, class: "text-base-content/60" }
                            input {
                                class: "grow",
                                placeholder: "Buscar por nombre, SKU, descripción o proveedor...",
                                value: "{search_text}",
                                oninput: move |e| filter.write().search = e.value(),
                            }
                        }
                        div { class: "flex gap-2",
                            select {
                                class: "select select-bordered",
                                onchange: move |e| {
                                    filter.write().category = match e.value().as_str() {
                                        "medicamento" => Some(Category::Medicamento),
                                        "vacuna" => Some(Category::Vacuna),
                                        "suministro" => Some(Category::Suministro),
                                        "alimento" => Some(Category::Alimento),
                                        "accesorio" => Some(Category::Accesorio),
                                        "otro" => Some(Category::Otro),
                                        _ => None,
                                    };
                                },
                                option { value: "", "Todas las categorías" }
                                for category in Category::ALL {
                                    option {
                                        value: category.as_str(),
                                        {category.label()}
                                    }
                                }
                            }
                            select {
                                class: "select select-bordered",
                                onchange: move |e| {
                                    filter.write().stock = match e.value().as_str() {
                                        "low" => StockFilter::Low,
                                        "expired" => StockFilter::Expired,
                                        "near_expiry" => StockFilter::NearExpiry,
                                        _ => StockFilter::All,
                                    };
                                },
                                option { value: "", "Todo el stock" }
                                option { value: "low", "Stock bajo" }
                                option { value: "expired", "Vencidos" }
                                option { value: "near_expiry", "Por vencer" }
                            }
                        }
                    }
                }
            }

            if load_failed {
                div { class: "alert alert-error mb-6",
                    span { "Error al cargar inventario" }
                }
            }

            if loading {
                div { class: "text-center py-12",
                    p { class: "text-base-content/60", "Cargando inventario..." }
                }
            } else if visible.is_empty() {
                EmptyState {
                    message: empty_message,
                    on_reset: move |_| filter.write().reset(),
                }
            } else {
                div { class: "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6",
                    for item in visible {
                        ItemCard {
                            key: "{item.id}",
                            item: item.clone(),
                            today,
                            on_view: move |item| detail.set(Some(item)),
                            on_edit: open_edit,
                            on_adjust: adjust_stock,
                            on_toggle: toggle_item,
                            on_delete: move |item| pending_delete.set(Some(item)),
                        }
                    }
                }
            }

            if show_form() {
                InventoryFormModal {
                    form,
                    editing: editing.read().is_some(),
                    on_save: save_item,
                    on_close: move |_| show_form.set(false),
                }
            }
            if let Some(item) = detail() {
                ItemDetailModal {
                    item,
                    today,
                    on_edit: open_edit,
                    on_close: move |_| detail.set(None),
                }
            }
            if let Some(item) = pending_delete() {
                ConfirmDialog {
                    message: format!(
                        "¿Estás seguro de eliminar {}? Esta acción no se puede deshacer.",
                        item.name
                    ),
                    on_confirm: confirm_delete,
                    on_cancel: move |_| pending_delete.set(None),
                }
            }
        }
    )
}
