pub const DEFAULT_API_URL: &str = "https://api.company-information.service.gov.uk";
pub const DEFAULT_IDENTITY_URL: &str = "https://identity.company-information.service.gov.uk";

pub const AUTHORIZE_PATH: &str = "/oauth2/authorise";
pub const TOKEN_PATH: &str = "/oauth2/token";

/// The only scope the CLI ever asks for.
pub const PROFILE_READ_SCOPE: &str =
    "https://identity.company-information.service.gov.uk/user/profile.read";

pub const CALLBACK_PATH: &str = "/callback";

pub const TRANSACTION_STATUS_CLOSED: &str = "closed";

pub const ADDRESS_CHANGE_DESCRIPTION: &str = "Change of registered office address";
pub const EMAIL_CHANGE_DESCRIPTION: &str = "Change of registered email address";
