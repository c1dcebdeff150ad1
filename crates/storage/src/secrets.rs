use std::{
    collections::HashMap,
    fs, io,
    path::PathBuf,
    sync::{Mutex, MutexGuard},
};

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use chacha20poly1305::{
    aead::{Aead, KeyInit},
    ChaCha20Poly1305, Key, Nonce,
};
use log::warn;
use rand::{rngs::OsRng, RngCore};
use serde::{Deserialize, Serialize};

use walletwise_core::{Error, Result};

const CURRENT_VERSION: u32 = 1;
const NONCE_LEN: usize = 12;

type SecretMap = HashMap<String, String>;

/// Secure namespace persisted as a single JSON file.
///
/// With a key the file holds `{version, nonce, ciphertext}`; without one it
/// holds the plain `{version, secrets}` map. A fresh nonce is drawn on every
/// write.
#[derive(Debug)]
pub struct FileSecretStore {
    path: PathBuf,
    encryption_key: Option<[u8; 32]>,
    lock: Mutex<()>,
}

#[derive(Serialize, Deserialize)]
struct PlainSecrets {
    version: u32,
    secrets: SecretMap,
}

#[derive(Serialize, Deserialize)]
struct SealedSecrets {
    version: u32,
    nonce: String,
    ciphertext: String,
}

/// On-disk layout; a sealed file is recognised by its nonce and ciphertext.
#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum SecretsFile {
    Sealed(SealedSecrets),
    Plain(PlainSecrets),
}

impl FileSecretStore {
    pub fn new(path: PathBuf, encryption_key: Option<&str>) -> Result<Self> {
        let key = match encryption_key {
            Some(value) if !value.trim().is_empty() => Some(decode_encryption_key(value)?),
            _ => None,
        };

        Ok(Self {
            path,
            encryption_key: key,
            lock: Mutex::new(()),
        })
    }

    pub fn is_encrypted(&self) -> bool {
        self.encryption_key.is_some()
    }

    pub fn set(&self, key: &str, secret: &str) -> Result<()> {
        self.update(|secrets| {
            secrets.insert(key.to_string(), secret.to_string());
        })
    }

    pub fn get(&self, key: &str) -> Result<Option<String>> {
        let _guard = self.guard()?;
        Ok(self.load_locked()?.remove(key))
    }

    pub fn delete(&self, key: &str) -> Result<()> {
        self.update(|secrets| {
            secrets.remove(key);
        })
    }

    /// Resets the namespace to an empty map.
    ///
    /// The previous content is never decrypted, so a file sealed under a
    /// different key can still be discarded.
    pub fn clear(&self) -> Result<()> {
        let _guard = self.guard()?;
        if let Err(e) = self.load_locked() {
            warn!(
                "Discarding unreadable secrets file {}: {}",
                self.path.display(),
                e
            );
        }
        self.persist_locked(SecretMap::new())
    }

    fn guard(&self) -> Result<MutexGuard<'_, ()>> {
        self.lock
            .lock()
            .map_err(|_| Error::Secret("Secret store lock poisoned".into()))
    }

    fn update<F>(&self, op: F) -> Result<()>
    where
        F: FnOnce(&mut SecretMap),
    {
        let _guard = self.guard()?;
        let mut secrets = self.load_locked()?;
        op(&mut secrets);
        self.persist_locked(secrets)
    }

    fn load_locked(&self) -> Result<SecretMap> {
        let raw = match fs::read(&self.path) {
            Ok(raw) if raw.is_empty() => return Ok(SecretMap::new()),
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(SecretMap::new()),
            Err(e) => return Err(e.into()),
        };

        let plain = match serde_json::from_slice::<SecretsFile>(&raw)? {
            SecretsFile::Plain(plain) => plain,
            SecretsFile::Sealed(sealed) => {
                let key = self.encryption_key.as_ref().ok_or_else(|| {
                    Error::Secret("WW_SECRET_KEY must be set to decrypt the secrets file".into())
                })?;
                unseal(key, &sealed)?
            }
        };
        Ok(plain.secrets)
    }

    fn persist_locked(&self, secrets: SecretMap) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let plain = PlainSecrets {
            version: CURRENT_VERSION,
            secrets,
        };
        let file = match self.encryption_key.as_ref() {
            Some(key) => SecretsFile::Sealed(seal(key, &plain)?),
            None => SecretsFile::Plain(plain),
        };

        fs::write(&self.path, serde_json::to_string_pretty(&file)?)?;
        Ok(())
    }
}

fn seal(key: &[u8; 32], plain: &PlainSecrets) -> Result<SealedSecrets> {
    let mut nonce = [0u8; NONCE_LEN];
    OsRng.fill_bytes(&mut nonce);

    let serialized = serde_json::to_vec(plain)?;
    let ciphertext = ChaCha20Poly1305::new(Key::from_slice(key))
        .encrypt(Nonce::from_slice(&nonce), serialized.as_slice())
        .map_err(|_| Error::Secret("Failed to encrypt secrets".into()))?;

    Ok(SealedSecrets {
        version: CURRENT_VERSION,
        nonce: BASE64.encode(nonce),
        ciphertext: BASE64.encode(ciphertext),
    })
}

fn unseal(key: &[u8; 32], sealed: &SealedSecrets) -> Result<PlainSecrets> {
    let nonce = decode_field("nonce", &sealed.nonce)?;
    if nonce.len() != NONCE_LEN {
        return Err(Error::Secret("Secrets file has a malformed nonce".into()));
    }
    let ciphertext = decode_field("ciphertext", &sealed.ciphertext)?;

    let serialized = ChaCha20Poly1305::new(Key::from_slice(key))
        .decrypt(Nonce::from_slice(&nonce), ciphertext.as_slice())
        .map_err(|_| Error::Secret("Failed to decrypt secrets file".into()))?;
    Ok(serde_json::from_slice(&serialized)?)
}

fn decode_field(name: &str, value: &str) -> Result<Vec<u8>> {
    BASE64
        .decode(value)
        .map_err(|e| Error::Secret(format!("Failed to decode {name}: {e}")))
}

fn decode_encryption_key(raw: &str) -> Result<[u8; 32]> {
    let trimmed = raw.trim();
    // A 32-char ascii key may also be valid base64 of the wrong length.
    let decoded = match BASE64.decode(trimmed) {
        Ok(bytes) if bytes.len() == 32 => bytes,
        _ if trimmed.len() == 32 => trimmed.as_bytes().to_vec(),
        Ok(_) => {
            return Err(Error::Secret(
                "WW_SECRET_KEY must decode to exactly 32 bytes".into(),
            ))
        }
        Err(_) => {
            return Err(Error::Secret(
                "WW_SECRET_KEY must be a base64 string or 32-byte ascii value".into(),
            ))
        }
    };

    let mut key = [0u8; 32];
    key.copy_from_slice(&decoded);
    Ok(key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn plain_file_round_trip() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("secrets.json");
        let store = FileSecretStore::new(file.clone(), None).unwrap();
        assert!(!store.is_encrypted());

        store.set("auth_access_token", "tok").unwrap();
        assert_eq!(store.get("auth_access_token").unwrap().as_deref(), Some("tok"));

        store.delete("auth_access_token").unwrap();
        assert!(store.get("auth_access_token").unwrap().is_none());
        assert!(file.exists());
    }

    #[test]
    fn encrypted_file_hides_values() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("nested").join("secrets.json");
        let key = BASE64.encode([7u8; 32]);
        let store = FileSecretStore::new(file.clone(), Some(&key)).unwrap();

        store.set("auth_refresh_token", "very-secret").unwrap();
        assert_eq!(
            store.get("auth_refresh_token").unwrap().as_deref(),
            Some("very-secret")
        );

        let raw = fs::read_to_string(&file).unwrap();
        assert!(raw.contains("ciphertext"));
        assert!(!raw.contains("very-secret"));
    }

    #[test]
    fn values_survive_reopening() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("secrets.json");
        let key = "0123456789abcdef0123456789abcdef";

        FileSecretStore::new(file.clone(), Some(key))
            .unwrap()
            .set("k", "v")
            .unwrap();

        let reopened = FileSecretStore::new(file, Some(key)).unwrap();
        assert_eq!(reopened.get("k").unwrap().as_deref(), Some("v"));
    }

    #[test]
    fn encrypted_file_requires_key() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("secrets.json");
        let key = BASE64.encode([1u8; 32]);
        FileSecretStore::new(file.clone(), Some(&key))
            .unwrap()
            .set("k", "v")
            .unwrap();

        let without_key = FileSecretStore::new(file.clone(), None).unwrap();
        assert!(matches!(without_key.get("k"), Err(Error::Secret(_))));

        let wrong_key = FileSecretStore::new(file, Some(&BASE64.encode([2u8; 32]))).unwrap();
        assert!(matches!(wrong_key.get("k"), Err(Error::Secret(_))));
    }

    #[test]
    fn clear_drops_every_secret() {
        let dir = tempdir().unwrap();
        let store = FileSecretStore::new(dir.path().join("secrets.json"), None).unwrap();
        store.set("a", "1").unwrap();
        store.set("b", "2").unwrap();

        store.clear().unwrap();
        assert!(store.get("a").unwrap().is_none());
        assert!(store.get("b").unwrap().is_none());
    }

    #[test]
    fn clear_discards_file_sealed_under_another_key() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("secrets.json");
        FileSecretStore::new(file.clone(), Some(&BASE64.encode([1u8; 32])))
            .unwrap()
            .set("auth_access_token", "old")
            .unwrap();

        let rotated = FileSecretStore::new(file.clone(), Some(&BASE64.encode([2u8; 32]))).unwrap();
        assert!(rotated.delete("auth_access_token").is_err());

        rotated.clear().unwrap();
        assert!(rotated.get("auth_access_token").unwrap().is_none());
        rotated.set("auth_access_token", "new").unwrap();
        assert_eq!(
            rotated.get("auth_access_token").unwrap().as_deref(),
            Some("new")
        );
    }

    #[test]
    fn clear_replaces_corrupt_file() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("secrets.json");
        fs::write(&file, "{not json").unwrap();

        let store = FileSecretStore::new(file, None).unwrap();
        assert!(store.get("k").is_err());

        store.clear().unwrap();
        assert!(store.get("k").unwrap().is_none());
    }

    #[test]
    fn rejects_malformed_keys() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("secrets.json");

        assert!(FileSecretStore::new(path.clone(), Some("too-short")).is_err());
        assert!(FileSecretStore::new(path.clone(), Some(&BASE64.encode([0u8; 16]))).is_err());
        assert!(!FileSecretStore::new(path, Some("   ")).unwrap().is_encrypted());
    }
}
