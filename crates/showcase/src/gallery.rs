use std::time::Duration;

use leptos::*;
use ui_kit::prelude::*;
use ui_kit::{SkeletonAnimation, SkeletonSize};

use crate::invoices::{
    customer_error, filter_invoices, format_amount, sample_invoices, server_page, Invoice,
    InvoiceStatus,
};
use crate::showcase_settings;

const SERVER_LATENCY: Duration = Duration::from_millis(450);

#[component]
/// Root view: installs settings and the alert stack, then every demo section.
pub fn ShowcaseApp() -> impl IntoView {
    provide_ui_kit_settings(showcase_settings());

    view! {
        <AlertProvider>
            <main class="showcase-root">
                <Breadcrumb
                    items=vec![
                        BreadcrumbItem::new("Home").href("#"),
                        BreadcrumbItem::new("Billing").href("#billing"),
                        BreadcrumbItem::new("Invoices").active(),
                    ]
                    show_back_button=false
                />
                <LocalInvoiceTable />
                <ServerInvoiceTable />
                <FilteredInvoiceTable />
                <ReloadingInvoiceTable />
                <EmptyInvoiceTable />
                <ControlGallery />
                <DraftForm />
            </main>
        </AlertProvider>
    }
}

fn invoice_columns(rows: RwSignal<Vec<Invoice>>, alerts: Option<Alerts>) -> Vec<Column<Invoice>> {
    vec![
        Column::field("Invoice", "id").sortable().width("7rem"),
        Column::field("Customer", "customer").sortable(),
        Column::derived("Amount", |invoice: &Invoice| format_amount(invoice.amount).into_view())
            .sort_key("amount")
            .sortable()
            .align(ColumnAlign::End),
        Column::derived("Status", |invoice: &Invoice| status_badge(invoice.status))
            .sort_key("status")
            .sortable(),
        Column::field("Issued", "issued_on").sortable(),
        Column::derived("", move |invoice: &Invoice| invoice_actions(invoice, rows, alerts))
            .align(ColumnAlign::End)
            .width("3rem"),
    ]
}

fn status_badge(status: InvoiceStatus) -> View {
    view! {
        <Badge variant=status.badge() size=ControlSize::Sm>
            {status.label()}
        </Badge>
    }
    .into_view()
}

fn invoice_actions(invoice: &Invoice, rows: RwSignal<Vec<Invoice>>, alerts: Option<Alerts>) -> View {
    let id = invoice.id;
    let actions = vec![
        RowAction::new(
            "Mark as paid",
            Callback::new(move |_| {
                rows.update(|rows| {
                    if let Some(row) = rows.iter_mut().find(|row| row.id == id) {
                        row.status = InvoiceStatus::Paid;
                    }
                });
                if let Some(alerts) = alerts {
                    alerts.success(format!("Invoice #{id} marked as paid"), None);
                }
            }),
        )
        .icon(IconName::CheckCircle)
        .disabled(invoice.status == InvoiceStatus::Paid),
        RowAction::new(
            "Delete",
            Callback::new(move |_| {
                rows.update(|rows| rows.retain(|row| row.id != id));
                if let Some(alerts) = alerts {
                    alerts.warning(
                        format!("Invoice #{id} deleted"),
                        Some("Only the demo data changed."),
                    );
                }
            }),
        )
        .icon(IconName::Close)
        .danger(),
    ];

    view! { <RowActionMenu actions=actions aria_label=format!("Actions for invoice #{id}") /> }
        .into_view()
}

fn invoice_details(invoice: Invoice) -> View {
    view! {
        <dl class="showcase-invoice-details">
            <dt>"Customer"</dt>
            <dd>{invoice.customer}</dd>
            <dt>"Issued"</dt>
            <dd>{invoice.issued_on}</dd>
            <dt>"Notes"</dt>
            <dd>{invoice.notes.unwrap_or_else(|| "None".to_string())}</dd>
        </dl>
    }
    .into_view()
}

#[component]
fn LocalInvoiceTable() -> impl IntoView {
    let alerts = use_alerts().ok();
    let rows = create_rw_signal(sample_invoices(47));
    let page = create_rw_signal(1_usize);
    let per_page = create_rw_signal(showcase_settings().items_per_page);

    view! {
        <DataTable
            rows=rows
            columns=invoice_columns(rows, alerts)
            items_per_page=per_page
            current_page=page
            expandable_rows=true
            expanded_row_render=Callback::new(invoice_details)
            get_row_key=row_key_fn(|invoice: &Invoice, _| RowKey::from(invoice.id))
            default_sort_key="issued_on"
            default_sort_order=SortOrder::Desc
            title="Invoices"
            subtitle="Sorted, paged, and expanded in the browser"
            on_page_change=Callback::new(move |target: usize| page.set(target))
            on_view_change=Callback::new(move |value: String| {
                if let Ok(size) = value.parse::<usize>() {
                    per_page.set(size);
                    page.set(1);
                }
            })
            on_row_toggle=Callback::new(move |(invoice, open): (Invoice, bool)| {
                logging::log!("invoice #{} expanded: {open}", invoice.id);
            })
            on_sort=Callback::new(move |(key, order): (String, SortOrder)| {
                if let Some(alerts) = alerts {
                    alerts.info(format!("Sorted by {key} ({order:?})"), None);
                }
            })
        />
    }
}

#[component]
fn ServerInvoiceTable() -> impl IntoView {
    let alerts = use_alerts().ok();
    let store = create_rw_signal(sample_invoices(132));
    let response = create_rw_signal(store.with_untracked(|all| server_page(all, 1, 20)));
    let loading = create_rw_signal(false);

    // Row actions edit the store; re-serve the visible page.
    create_effect(move |_| {
        let (page, per_page) = response.with_untracked(|(_, meta)| (meta.current_page, meta.per_page));
        let served = store.with(|all| server_page(all, page, per_page));
        response.set(served);
    });

    let fetch = move |page: usize, per_page: usize| {
        loading.set(true);
        set_timeout(
            move || {
                response.set(store.with_untracked(|all| server_page(all, page, per_page)));
                loading.set(false);
            },
            SERVER_LATENCY,
        );
    };

    let rows = Signal::derive(move || response.with(|(rows, _)| rows.clone()));
    let meta = Signal::derive(move || Some(response.with(|(_, meta)| *meta)));

    view! {
        <DataTable
            rows=rows
            columns=invoice_columns(store, alerts)
            pagination_meta=meta
            loading=loading
            title="Archive"
            subtitle="Paged by a simulated endpoint"
            on_page_change=Callback::new(move |target: usize| {
                fetch(target, response.with_untracked(|(_, meta)| meta.per_page));
            })
            on_view_change=Callback::new(move |value: String| {
                if let Ok(size) = value.parse::<usize>() {
                    fetch(1, size);
                }
            })
            on_row_click=Callback::new(move |invoice: Invoice| {
                if let Some(alerts) = alerts {
                    alerts.info(
                        format!("Invoice #{} selected", invoice.id),
                        Some(format_amount(invoice.amount).as_str()),
                    );
                }
            })
        />
    }
}

#[component]
fn FilteredInvoiceTable() -> impl IntoView {
    let all = store_value(sample_invoices(60));
    let query = create_rw_signal(String::new());
    let status = create_rw_signal(None::<InvoiceStatus>);
    let page = create_rw_signal(1_usize);
    let rows = Signal::derive(move || {
        let (query, status) = (query.get(), status.get());
        all.with_value(|all| filter_invoices(all, &query, status))
    });
    let columns = vec![
        Column::field("Invoice", "id").sortable(),
        Column::field("Customer", "customer").sortable(),
        Column::derived("Status", |invoice: &Invoice| status_badge(invoice.status)),
    ];
    let status_options = std::iter::once(SelectOption::new("all").label("All statuses"))
        .chain(
            InvoiceStatus::ALL
                .into_iter()
                .map(|status| SelectOption::new(status.token()).label(status.label())),
        )
        .collect::<Vec<_>>();

    view! {
        <section class="showcase-section">
            <div class="showcase-row">
                <Search
                    placeholder="Search customers or numbers"
                    on_search=Callback::new(move |value: String| {
                        query.set(value);
                        page.set(1);
                    })
                />
                <SelectButton
                    options=status_options
                    value=Some("all".to_string())
                    size=ControlSize::Sm
                    on_change=Callback::new(move |token: String| {
                        status.set(InvoiceStatus::from_token(&token));
                        page.set(1);
                    })
                />
            </div>
            <DataTable
                rows=rows
                columns=columns
                items_per_page=5
                current_page=page
                title="Lookup"
                on_page_change=Callback::new(move |target: usize| page.set(target))
            />
        </section>
    }
}

#[component]
fn DraftForm() -> impl IntoView {
    let alerts = use_alerts().ok();
    let customer = create_rw_signal(String::new());
    let notes = create_rw_signal(String::new());
    let touched = create_rw_signal(false);
    let confirm_open = create_rw_signal(false);
    let error = Signal::derive(move || {
        if touched.get() {
            customer.with(|name| customer_error(name))
        } else {
            None
        }
    });

    view! {
        <Card layout_class="showcase-section">
            <h2>"New draft"</h2>
            <Input
                id="draft-customer"
                label="Customer"
                value=customer
                placeholder="Acme Corp"
                required=true
                error=error
                help_text="Shown on the invoice header."
                on_input=Callback::new(move |value: String| {
                    touched.set(true);
                    customer.set(value);
                })
            />
            <Input
                id="draft-notes"
                label="Notes"
                kind=InputKind::Textarea
                value=notes
                on_input=Callback::new(move |value: String| notes.set(value))
            />
            <div class="showcase-row">
                <Button
                    variant=ButtonVariant::Danger
                    outline=true
                    on_click=Callback::new(move |_| confirm_open.set(true))
                >
                    "Discard draft"
                </Button>
                <Button on_click=Callback::new(move |_| {
                    touched.set(true);
                    let message = customer.with(|name| customer_error(name));
                    if let Some(alerts) = alerts {
                        match message {
                            Some(message) => alerts.error("Draft not saved", Some(message.as_str())),
                            None => alerts.success("Draft saved", None),
                        };
                    }
                })>
                    "Save draft"
                </Button>
            </div>
        </Card>
        <ConfirmDialog
            open=confirm_open
            title="Discard draft?"
            message="The customer and notes you entered will be lost."
            confirm_label="Discard"
            kind=AlertKind::Error
            on_cancel=Callback::new(move |_| confirm_open.set(false))
            on_confirm=Callback::new(move |_| {
                confirm_open.set(false);
                customer.set(String::new());
                notes.set(String::new());
                touched.set(false);
                if let Some(alerts) = alerts {
                    alerts.info("Draft discarded", None);
                }
            })
        />
    }
}

#[component]
fn ReloadingInvoiceTable() -> impl IntoView {
    let rows = create_rw_signal(sample_invoices(6));
    let loading = create_rw_signal(true);
    let reload = move || {
        loading.set(true);
        set_timeout(move || loading.set(false), Duration::from_millis(1200));
    };
    reload();

    let columns = vec![
        Column::field("Invoice", "id"),
        Column::field("Customer", "customer"),
        Column::derived("Status", |invoice: &Invoice| status_badge(invoice.status)),
    ];

    view! {
        <section class="showcase-section">
            <Button
                variant=ButtonVariant::Secondary
                size=ControlSize::Sm
                loading=loading
                on_click=Callback::new(move |_| reload())
            >
                "Reload"
            </Button>
            <DataTable rows=rows columns=columns loading=loading show_pagination=false />
        </section>
    }
}

#[component]
fn EmptyInvoiceTable() -> impl IntoView {
    let alerts = use_alerts().ok();
    let rows = Signal::derive(Vec::<Invoice>::new);
    let columns = vec![
        Column::field("Invoice", "id"),
        Column::field("Customer", "customer"),
        Column::field("Amount", "amount").align(ColumnAlign::End),
    ];

    view! {
        <DataTable
            rows=rows
            columns=columns
            use_card_layout=true
            title="Drafts"
            empty_state=move || {
                view! {
                    <EmptyStateCard
                        title="No drafts yet"
                        description="Drafts appear here until they are sent."
                        icon=IconName::Info
                        action_label="New draft"
                        on_action=Callback::new(move |_| {
                            if let Some(alerts) = alerts {
                                alerts.info("Drafting is disabled in the showcase", None);
                            }
                        })
                    />
                }
            }
        />
    }
}

#[component]
fn ControlGallery() -> impl IntoView {
    let alerts = use_alerts().ok();
    let modal_open = create_rw_signal(false);
    let notify = move |kind: AlertKind| {
        if let Some(alerts) = alerts {
            alerts.show(AlertSpec::new(kind, format!("{kind:?} alert")).description("Dismisses itself."));
        }
    };

    view! {
        <Card layout_class="showcase-section">
            <h2>"Controls"</h2>
            <div class="showcase-row">
                <Tooltip content="Sends every pending invoice">
                    <Button icon=IconName::ChevronRight icon_position=IconPosition::Right>
                        "Send all"
                    </Button>
                </Tooltip>
                <Tooltip content="Shown below" placement=TooltipPlacement::Bottom variant=TooltipVariant::Light>
                    <Button variant=ButtonVariant::Neutral outline=true>"Hover me"</Button>
                </Tooltip>
                <Button
                    variant=ButtonVariant::Dark
                    on_click=Callback::new(move |_| modal_open.set(true))
                >
                    "Archive"
                </Button>
            </div>
            <div class="showcase-row">
                <Badge>"Draft"</Badge>
                <Badge variant=BadgeVariant::Info>"Info"</Badge>
                <Badge variant=BadgeVariant::Secondary size=ControlSize::Lg>"Large"</Badge>
            </div>
            <div class="showcase-row">
                <Button size=ControlSize::Sm on_click=Callback::new(move |_| notify(AlertKind::Success))>
                    "Success"
                </Button>
                <Button size=ControlSize::Sm on_click=Callback::new(move |_| notify(AlertKind::Error))>
                    "Error"
                </Button>
                <Button size=ControlSize::Sm on_click=Callback::new(move |_| notify(AlertKind::Warning))>
                    "Warning"
                </Button>
                <Button size=ControlSize::Sm on_click=Callback::new(move |_| notify(AlertKind::Info))>
                    "Info"
                </Button>
            </div>
            <div class="showcase-row">
                <Skeleton variant=SkeletonVariant::Avatar />
                <Skeleton variant=SkeletonVariant::Text count=3 animation=SkeletonAnimation::Wave />
                <Skeleton variant=SkeletonVariant::Button size=SkeletonSize::Lg shimmer=true delay_ms=150 />
                <SkeletonText width="12rem" />
            </div>
        </Card>
        <Modal
            open=modal_open
            on_close=Callback::new(move |_| modal_open.set(false))
            title="Archive invoices"
            size=ModalSize::Sm
            footer=move || {
                view! {
                    <Button variant=ButtonVariant::Neutral on_click=Callback::new(move |_| modal_open.set(false))>
                        "Cancel"
                    </Button>
                    <Button on_click=Callback::new(move |_| {
                        modal_open.set(false);
                        if let Some(alerts) = alerts {
                            alerts.success("Invoices archived", None);
                        }
                    })>
                        "Archive"
                    </Button>
                }
            }
        >
            <p>"Archived invoices leave the active list but stay searchable."</p>
        </Modal>
    }
}
