pub mod form;
pub mod invoice;
pub mod views;

pub use form::{parse_invoice_form, FieldErrors, InvoiceDraft, ValidInvoice};
pub use invoice::{
    Customer, Invoice, InvoiceUpdate, NewInvoice, Revenue, STATUS_PAID, STATUS_PENDING,
};
pub use views::{CardSummary, CustomerTableRow, InvoiceTableRow, LatestInvoiceView};
