use std::str::FromStr;
use std::time::Duration;

use anyhow::{Context, anyhow};
use chrono::{DateTime, SubsecRound, Utc};
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteRow};
use sqlx::{Row, SqliteConnection, SqlitePool, Transaction};

use crate::domain::brand::models::brand::{
    Brand, BrandId, BrandName, CreateBrandError, CreateBrandRequest, DeleteBrandError,
    GetAllBrandsError, GetBrandError, UpdateBrandError, UpdateBrandRequest,
};
use crate::domain::brand::ports::BrandRepository;
use crate::domain::device::models::device::{
    CreateDeviceError, CreateDeviceRequest, DeleteDeviceError, Device, DeviceId, DeviceName,
    GetAllDevicesError, GetDeviceError, PatchDeviceRequest, UpdateDeviceError,
};
use crate::domain::device::models::page::{Page, PageRequest};
use crate::domain::device::ports::DeviceRepository;

const SELECT_DEVICES: &str = "SELECT d.id, d.name, d.creation_time, b.id AS brand_id, \
     b.name AS brand_name FROM devices d JOIN brands b ON b.id = d.brand_id";

/// How long a writer waits for a competing write transaction before giving up.
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Clone)]
pub struct Sqlite {
    pool: SqlitePool,
}

impl Sqlite {
    /// Opens (creating if needed) the database at `path` and applies pending migrations.
    pub async fn new(path: &str) -> Result<Sqlite, anyhow::Error> {
        let options = SqliteConnectOptions::from_str(path)
            .with_context(|| format!("invalid database path {}", path))?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .busy_timeout(BUSY_TIMEOUT)
            .pragma("foreign_keys", "ON");

        let pool = SqlitePool::connect_with(options)
            .await
            .with_context(|| format!("failed to open database at {}", path))?;

        Self::migrate(pool).await
    }

    /// Private in-memory database. The pool holds exactly one connection that never expires,
    /// since every SQLite memory connection is its own database.
    pub async fn in_memory() -> Result<Sqlite, anyhow::Error> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")
            .context("invalid in-memory database options")?
            .pragma("foreign_keys", "ON");

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await
            .context("failed to open in-memory database")?;

        Self::migrate(pool).await
    }

    async fn migrate(pool: SqlitePool) -> Result<Sqlite, anyhow::Error> {
        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .context("failed to run database migrations")?;

        Ok(Sqlite { pool })
    }

    /// Starts a transaction that takes the write lock up front, so competing writers wait on
    /// [BUSY_TIMEOUT] instead of failing with `SQLITE_BUSY` on lock upgrade.
    async fn begin_write(&self) -> Result<Transaction<'static, sqlx::Sqlite>, anyhow::Error> {
        self.pool
            .begin_with("BEGIN IMMEDIATE")
            .await
            .context("failed to start SQLite write transaction")
    }

    async fn find_brand(
        conn: &mut SqliteConnection,
        id: &BrandId,
    ) -> Result<Option<Brand>, anyhow::Error> {
        let row = sqlx::query("SELECT id, name FROM brands WHERE id = ?")
            .bind(id.into_inner())
            .fetch_optional(conn)
            .await?;

        row.as_ref().map(brand_from_row).transpose()
    }

    /// Exact-name lookup that inserts the brand on a miss. Runs on the caller's connection so
    /// that it shares the caller's transaction.
    async fn get_or_create_brand_in(
        conn: &mut SqliteConnection,
        name: &BrandName,
    ) -> Result<Brand, sqlx::Error> {
        let existing = sqlx::query("SELECT id FROM brands WHERE name = ? ORDER BY id LIMIT 1")
            .bind(name.as_str())
            .fetch_optional(&mut *conn)
            .await?;

        if let Some(row) = existing {
            let id: i64 = row.try_get("id")?;
            return Ok(Brand::new(BrandId::new(id), name.clone()));
        }

        let id = sqlx::query("INSERT INTO brands (name) VALUES (?)")
            .bind(name.as_str())
            .execute(&mut *conn)
            .await?
            .last_insert_rowid();
        tracing::debug!(id, %name, "created brand on demand");

        Ok(Brand::new(BrandId::new(id), name.clone()))
    }

    async fn find_device(
        conn: &mut SqliteConnection,
        id: &DeviceId,
    ) -> Result<Option<Device>, anyhow::Error> {
        let row = sqlx::query(&format!("{SELECT_DEVICES} WHERE d.id = ?"))
            .bind(id.into_inner())
            .fetch_optional(conn)
            .await?;

        row.as_ref().map(device_from_row).transpose()
    }

    async fn save_device(
        conn: &mut SqliteConnection,
        req: &CreateDeviceRequest,
    ) -> Result<Device, sqlx::Error> {
        let brand = Self::get_or_create_brand_in(&mut *conn, req.brand()).await?;
        let now = Utc::now().trunc_subsecs(3);

        let id = sqlx::query("INSERT INTO devices (name, brand_id, creation_time) VALUES (?, ?, ?)")
            .bind(req.name().as_str())
            .bind(brand.id().into_inner())
            .bind(now)
            .execute(&mut *conn)
            .await?
            .last_insert_rowid();

        Ok(Device::new(DeviceId::new(id), req.name().clone(), brand, now))
    }
}

impl BrandRepository for Sqlite {
    async fn find_brand_by_id(&self, id: &BrandId) -> Result<Brand, GetBrandError> {
        let mut conn = self
            .pool
            .acquire()
            .await
            .context("failed to acquire SQLite connection")?;

        Self::find_brand(&mut conn, id)
            .await
            .with_context(|| format!("failed to fetch brand with id {}", id))?
            .ok_or(GetBrandError::NotFound { id: *id })
    }

    async fn find_all_brands(&self) -> Result<Vec<Brand>, GetAllBrandsError> {
        let rows = sqlx::query("SELECT id, name FROM brands ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .context("failed to fetch brands")?;

        let brands = rows
            .iter()
            .map(brand_from_row)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(brands)
    }

    async fn create_brand(&self, req: &CreateBrandRequest) -> Result<Brand, CreateBrandError> {
        let id = sqlx::query("INSERT INTO brands (name) VALUES (?)")
            .bind(req.name().as_str())
            .execute(&self.pool)
            .await
            .with_context(|| format!("failed to save brand with name {:?}", req.name()))?
            .last_insert_rowid();

        Ok(Brand::new(BrandId::new(id), req.name().clone()))
    }

    async fn get_or_create_brand(&self, name: &BrandName) -> Result<Brand, CreateBrandError> {
        let mut tx = self.begin_write().await?;

        let brand = Self::get_or_create_brand_in(&mut tx, name)
            .await
            .with_context(|| format!("failed to get or create brand with name {:?}", name))?;

        tx.commit()
            .await
            .context("failed to commit SQLite transaction")?;

        Ok(brand)
    }

    async fn update_brand(
        &self,
        id: &BrandId,
        req: &UpdateBrandRequest,
    ) -> Result<Brand, UpdateBrandError> {
        let result = sqlx::query("UPDATE brands SET name = ? WHERE id = ?")
            .bind(req.name().as_str())
            .bind(id.into_inner())
            .execute(&self.pool)
            .await
            .with_context(|| format!("failed to update brand with id {}", id))?;

        if result.rows_affected() == 0 {
            return Err(UpdateBrandError::NotFound { id: *id });
        }

        Ok(Brand::new(*id, req.name().clone()))
    }

    async fn delete_brand(&self, id: &BrandId) -> Result<(), DeleteBrandError> {
        let result = sqlx::query("DELETE FROM brands WHERE id = ?")
            .bind(id.into_inner())
            .execute(&self.pool)
            .await
            .map_err(|e| {
                if is_foreign_key_violation(&e) {
                    DeleteBrandError::InUse { id: *id }
                } else {
                    anyhow!(e)
                        .context(format!("failed to delete brand with id {}", id))
                        .into()
                }
            })?;

        if result.rows_affected() == 0 {
            return Err(DeleteBrandError::NotFound { id: *id });
        }

        Ok(())
    }
}

impl DeviceRepository for Sqlite {
    async fn find_device_by_id(&self, id: &DeviceId) -> Result<Device, GetDeviceError> {
        let mut conn = self
            .pool
            .acquire()
            .await
            .context("failed to acquire SQLite connection")?;

        Self::find_device(&mut conn, id)
            .await
            .with_context(|| format!("failed to fetch device with id {}", id))?
            .ok_or(GetDeviceError::NotFound { id: *id })
    }

    async fn find_all_devices(&self) -> Result<Vec<Device>, GetAllDevicesError> {
        let rows = sqlx::query(&format!("{SELECT_DEVICES} ORDER BY d.id"))
            .fetch_all(&self.pool)
            .await
            .context("failed to fetch devices")?;

        Ok(devices_from_rows(&rows)?)
    }

    async fn find_devices_by_brand_name(
        &self,
        brand_name: &str,
    ) -> Result<Vec<Device>, GetAllDevicesError> {
        let rows = sqlx::query(&format!("{SELECT_DEVICES} WHERE b.name = ? ORDER BY d.id"))
            .bind(brand_name)
            .fetch_all(&self.pool)
            .await
            .with_context(|| format!("failed to fetch devices of brand {:?}", brand_name))?;

        Ok(devices_from_rows(&rows)?)
    }

    async fn find_devices_page(&self, req: &PageRequest) -> Result<Page<Device>, GetAllDevicesError> {
        let offset = i64::try_from(req.offset()).context("page offset out of range")?;

        // One read transaction so that the page and the count see the same snapshot.
        let mut tx = self
            .pool
            .begin()
            .await
            .context("failed to start SQLite transaction")?;

        let rows = sqlx::query(&format!("{SELECT_DEVICES} ORDER BY d.id LIMIT ? OFFSET ?"))
            .bind(i64::from(req.limit()))
            .bind(offset)
            .fetch_all(&mut *tx)
            .await
            .with_context(|| format!("failed to fetch device page {}", req.page()))?;

        let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM devices")
            .fetch_one(&mut *tx)
            .await
            .context("failed to count devices")?;

        tx.commit()
            .await
            .context("failed to end SQLite transaction")?;

        Ok(Page::new(devices_from_rows(&rows)?, total.max(0) as u64))
    }

    async fn create_device(&self, req: &CreateDeviceRequest) -> Result<Device, CreateDeviceError> {
        let mut tx = self.begin_write().await?;

        let device = Self::save_device(&mut tx, req)
            .await
            .with_context(|| format!("failed to save device with name {:?}", req.name()))?;

        tx.commit()
            .await
            .context("failed to commit SQLite transaction")?;

        Ok(device)
    }

    async fn create_devices(
        &self,
        reqs: &[CreateDeviceRequest],
    ) -> Result<Vec<Device>, CreateDeviceError> {
        let mut tx = self.begin_write().await?;

        let mut devices = Vec::with_capacity(reqs.len());
        for req in reqs {
            let device = Self::save_device(&mut tx, req)
                .await
                .with_context(|| format!("failed to save device with name {:?}", req.name()))?;
            devices.push(device);
        }

        tx.commit()
            .await
            .context("failed to commit SQLite transaction")?;

        Ok(devices)
    }

    async fn update_device(
        &self,
        id: &DeviceId,
        req: &PatchDeviceRequest,
    ) -> Result<Device, UpdateDeviceError> {
        let mut tx = self.begin_write().await?;

        let existing = Self::find_device(&mut tx, id)
            .await
            .with_context(|| format!("failed to fetch device with id {}", id))?
            .ok_or(UpdateDeviceError::NotFound { id: *id })?;

        let name = req.name().unwrap_or(existing.name()).clone();
        let brand = match req.brand() {
            Some(brand_name) => Self::get_or_create_brand_in(&mut tx, brand_name)
                .await
                .with_context(|| format!("failed to resolve brand {:?}", brand_name))?,
            None => existing.brand().clone(),
        };

        sqlx::query("UPDATE devices SET name = ?, brand_id = ? WHERE id = ?")
            .bind(name.as_str())
            .bind(brand.id().into_inner())
            .bind(id.into_inner())
            .execute(&mut *tx)
            .await
            .with_context(|| format!("failed to update device with id {}", id))?;

        tx.commit()
            .await
            .context("failed to commit SQLite transaction")?;

        Ok(Device::new(*id, name, brand, *existing.creation_time()))
    }

    async fn delete_device(&self, id: &DeviceId) -> Result<(), DeleteDeviceError> {
        let result = sqlx::query("DELETE FROM devices WHERE id = ?")
            .bind(id.into_inner())
            .execute(&self.pool)
            .await
            .with_context(|| format!("failed to delete device with id {}", id))?;

        if result.rows_affected() == 0 {
            return Err(DeleteDeviceError::NotFound { id: *id });
        }

        Ok(())
    }

    async fn delete_all_devices(&self) -> Result<u64, DeleteDeviceError> {
        let result = sqlx::query("DELETE FROM devices")
            .execute(&self.pool)
            .await
            .context("failed to delete devices")?;

        Ok(result.rows_affected())
    }
}

fn brand_from_row(row: &SqliteRow) -> Result<Brand, anyhow::Error> {
    let id: i64 = row.try_get("id")?;
    let name: String = row.try_get("name")?;
    let name = BrandName::new(&name).with_context(|| format!("brand {} has an invalid name", id))?;

    Ok(Brand::new(BrandId::new(id), name))
}

fn device_from_row(row: &SqliteRow) -> Result<Device, anyhow::Error> {
    let id: i64 = row.try_get("id")?;
    let name: String = row.try_get("name")?;
    let creation_time: DateTime<Utc> = row.try_get("creation_time")?;
    let brand_id: i64 = row.try_get("brand_id")?;
    let brand_name: String = row.try_get("brand_name")?;

    let name =
        DeviceName::new(&name).with_context(|| format!("device {} has an invalid name", id))?;
    let brand_name = BrandName::new(&brand_name)
        .with_context(|| format!("brand {} has an invalid name", brand_id))?;

    Ok(Device::new(
        DeviceId::new(id),
        name,
        Brand::new(BrandId::new(brand_id), brand_name),
        creation_time,
    ))
}

fn devices_from_rows(rows: &[SqliteRow]) -> Result<Vec<Device>, anyhow::Error> {
    rows.iter().map(device_from_row).collect()
}

const FOREIGN_KEY_VIOLATION_CODE: &str = "787";

fn is_foreign_key_violation(err: &sqlx::Error) -> bool {
    if let sqlx::Error::Database(db_err) = err {
        if let Some(code) = db_err.code() {
            if code == FOREIGN_KEY_VIOLATION_CODE {
                return true;
            }
        }
    }

    false
}
