// Scratch exploration of the hashing and token primitives, detached from the
// application stores on purpose.

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
struct DemoClaims {
    sub: String,
    scope: String,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let password = "123abc!!";

    let hash = bcrypt::hash(password, 10)?;
    println!("hash: {hash}");
    println!("correct password verifies: {}", bcrypt::verify(password, &hash)?);
    println!("wrong password verifies: {}", bcrypt::verify("letmein", &hash)?);

    let secret = b"somesecret";
    let claims = DemoClaims {
        sub: "user-3".into(),
        scope: "auth".into(),
    };
    let token = encode(&Header::default(), &claims, &EncodingKey::from_secret(secret))?;
    println!("token: {token}");

    let mut validation = Validation::default();
    validation.validate_exp = false;
    validation.required_spec_claims.clear();

    let decoded = decode::<DemoClaims>(&token, &DecodingKey::from_secret(secret), &validation)?;
    println!("decoded: sub={} scope={}", decoded.claims.sub, decoded.claims.scope);

    let tampered = decode::<DemoClaims>(&token, &DecodingKey::from_secret(b"wrongsecret"), &validation);
    println!("wrong secret verifies: {}", tampered.is_ok());

    Ok(())
}
