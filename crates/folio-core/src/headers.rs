//! Security response headers

/// Header name and value pairs added to every HTTP response
pub const SECURITY_HEADERS: [(&str, &str); 6] = [
	(
		"content-security-policy",
		"default-src 'self'; img-src 'self' https: data:; style-src 'self' 'unsafe-inline'; \
		 script-src 'self'; font-src 'self' https:; connect-src 'self' https:;",
	),
	("x-content-type-options", "nosniff"),
	("x-frame-options", "DENY"),
	("x-xss-protection", "1; mode=block"),
	("referrer-policy", "strict-origin-when-cross-origin"),
	("strict-transport-security", "max-age=31536000; includeSubDomains"),
];


// vim: ts=4
