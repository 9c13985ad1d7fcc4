//! OpenAPI / Swagger UI Documentation
//!
//! - Swagger UI: `http://localhost:8080/docs`
//! - OpenAPI JSON: `http://localhost:8080/api-docs/openapi.json`

use utoipa::OpenApi;

use crate::accounts::handlers::{CreateLibrarianRequest, UpdateLibrarianRequest};
use crate::accounts::models::LibrarianOverview;
use crate::accounts::service::{AuthResponse, LoginRequest};
use crate::books::handlers::{AddBookRequest, SearchBooksQuery, UpdateBookRequest};
use crate::books::models::{Book, BookOverview};
use crate::certificates::models::CertificateRecord;
use crate::donations::models::{BatchEntry, BatchReceipt, Donation, RecordBatchRequest};
use crate::donors::handlers::{CreateDonorRequest, DonorLookupRequest, UpdateDonorRequest};
use crate::donors::models::{DonatedBook, Donor, DonorOverview};
use crate::gateway::handlers::HealthResponse;
use crate::stats::models::{DashboardStats, MonthlyDonations, RecentDonation, SummaryStats};
use crate::transfers::models::{CreateTransferRequest, Transfer, TransferDetails};

/// Main API Documentation struct
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Bookbridge API",
        version = "1.0.0",
        description = "Book donation tracking backend: donors, donations, transfers and inventory.",
        license(name = "MIT")
    ),
    servers(
        (url = "http://localhost:8080", description = "Development"),
    ),
    paths(
        crate::gateway::handlers::health_check,
        // Auth
        crate::accounts::handlers::librarian_login,
        crate::accounts::handlers::admin_login,
        // Books
        crate::books::handlers::list_books,
        crate::books::handlers::search_books,
        crate::books::handlers::add_book,
        crate::books::handlers::update_book,
        crate::books::handlers::delete_book,
        // Donors
        crate::donors::handlers::list_donors,
        crate::donors::handlers::create_donor,
        crate::donors::handlers::update_donor,
        crate::donors::handlers::delete_donor,
        crate::donors::handlers::lookup_donor,
        crate::donors::handlers::donated_books,
        // Donations
        crate::donations::handlers::record_batch,
        // Transfers
        crate::transfers::handlers::list_transfers,
        crate::transfers::handlers::transferable_books,
        crate::transfers::handlers::create_transfer,
        crate::transfers::handlers::delete_transfer,
        // Librarians
        crate::accounts::handlers::list_librarians,
        crate::accounts::handlers::create_librarian,
        crate::accounts::handlers::update_librarian,
        crate::accounts::handlers::delete_librarian,
        // Certificates
        crate::certificates::handlers::upload_certificate,
        crate::certificates::handlers::latest_certificate,
        // Stats
        crate::stats::handlers::dashboard,
        crate::stats::handlers::summary,
    ),
    components(schemas(
        HealthResponse,
        LoginRequest,
        AuthResponse,
        Book,
        BookOverview,
        AddBookRequest,
        UpdateBookRequest,
        SearchBooksQuery,
        Donor,
        DonorOverview,
        DonatedBook,
        CreateDonorRequest,
        UpdateDonorRequest,
        DonorLookupRequest,
        Donation,
        BatchEntry,
        BatchReceipt,
        RecordBatchRequest,
        Transfer,
        TransferDetails,
        CreateTransferRequest,
        LibrarianOverview,
        CreateLibrarianRequest,
        UpdateLibrarianRequest,
        CertificateRecord,
        DashboardStats,
        RecentDonation,
        MonthlyDonations,
        SummaryStats,
    )),
    tags(
        (name = "System", description = "Service health"),
        (name = "Auth", description = "Librarian and admin login"),
        (name = "Books", description = "Book inventory management"),
        (name = "Donors", description = "Donor registry"),
        (name = "Donations", description = "Donation recording"),
        (name = "Transfers", description = "Outbound book transfers"),
        (name = "Librarians", description = "Staff management"),
        (name = "Certificates", description = "Donation certificate images"),
        (name = "Stats", description = "Aggregate statistics"),
    )
)]
pub struct ApiDoc;
